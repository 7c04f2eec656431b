pub mod u501_state_transfer;
