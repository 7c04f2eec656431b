pub mod d400_brand_summary;
