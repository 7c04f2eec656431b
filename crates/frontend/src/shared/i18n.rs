//! Interface labels for the four supported languages.
//!
//! Each entry lists the text in `Language::all()` order: es, en, it, pt.

use contracts::domain::a001_brand_market::{AlignmentAspect, ChecklistItem, OrganicField, PaidField};
use contracts::domain::a002_recommendation::RecommendationScope;
use contracts::enums::{AnalysisPeriod, CountryId, Language, Priority, TriState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    AppTitle,
    Dashboard,
    Markets,
    Analysis,
    Recommendations,
    General,
    Import,
    Export,
    Clear,
    ConfirmClear,
    ImportDone,
    ImportFailed,
    ExportFailed,
    ProjectName,
    Date,
    Objectives,
    Organic,
    Paid,
    CopyFromReference,
    ConfirmCopy,
    Manager,
    HasCalendar,
    Strategy,
    AnalysisPeriod,
    Profiles,
    Platform,
    Username,
    Active,
    Audience,
    CurrentStyle,
    DesiredStyle,
    Checklist,
    Alignment,
    Metrics,
    AdsEnabled,
    NoBrands,
    Yes,
    No,
    Partial,
    TotalBudget,
    TotalFollowers,
    AvgEngagement,
    ActiveRecommendations,
    BudgetByMarket,
    BudgetByPlatform,
    NoSpend,
    CopySummary,
    Copied,
    NewRecommendation,
    Brand,
    Scope,
    Area,
    Problem,
    Action,
    Priority,
    Add,
    Delete,
    DraftIncomplete,
    NoRecommendations,
    High,
    Medium,
    Low,
    AccessDenied,
    AccessDeniedHint,
}

fn entries(label: Label) -> [&'static str; 4] {
    match label {
        Label::AppTitle => ["Protocolo de Auditoría Social", "Social Media Audit Protocol", "Protocollo di Audit Social", "Protocolo de Auditoria Social"],
        Label::Dashboard => ["Panel", "Dashboard", "Cruscotto", "Painel"],
        Label::Markets => ["Mercados", "Markets", "Mercati", "Mercados"],
        Label::Analysis => ["Análisis", "Analysis", "Analisi", "Análise"],
        Label::Recommendations => ["Recomendaciones", "Recommendations", "Raccomandazioni", "Recomendações"],
        Label::General => ["General", "General", "Generale", "Geral"],
        Label::Import => ["Importar", "Import", "Importa", "Importar"],
        Label::Export => ["Exportar", "Export", "Esporta", "Exportar"],
        Label::Clear => ["Borrar todo", "Clear all", "Cancella tutto", "Limpar tudo"],
        Label::ConfirmClear => ["¿Borrar todos los datos? Esta acción no se puede deshacer.", "Clear all data? This cannot be undone.", "Cancellare tutti i dati? L'azione è irreversibile.", "Limpar todos os dados? Esta ação não pode ser desfeita."],
        Label::ImportDone => ["Datos importados", "Data imported", "Dati importati", "Dados importados"],
        Label::ImportFailed => ["Archivo no válido", "Invalid file", "File non valido", "Arquivo inválido"],
        Label::ExportFailed => ["No se pudo exportar", "Export failed", "Esportazione non riuscita", "Falha ao exportar"],
        Label::ProjectName => ["Proyecto", "Project", "Progetto", "Projeto"],
        Label::Date => ["Fecha", "Date", "Data", "Data"],
        Label::Objectives => ["Objetivos", "Objectives", "Obiettivi", "Objetivos"],
        Label::Organic => ["Orgánico", "Organic", "Organico", "Orgânico"],
        Label::Paid => ["Pagado", "Paid", "A pagamento", "Pago"],
        Label::CopyFromReference => ["Copiar desde España", "Copy from Spain", "Copia dalla Spagna", "Copiar da Espanha"],
        Label::ConfirmCopy => ["Se sobrescribirán los datos de este mercado. ¿Continuar?", "This market's data will be overwritten. Continue?", "I dati di questo mercato verranno sovrascritti. Continuare?", "Os dados deste mercado serão substituídos. Continuar?"],
        Label::Manager => ["Responsable", "Manager", "Responsabile", "Responsável"],
        Label::HasCalendar => ["Calendario editorial", "Content calendar", "Calendario editoriale", "Calendário editorial"],
        Label::Strategy => ["Estrategia", "Strategy", "Strategia", "Estratégia"],
        Label::AnalysisPeriod => ["Periodo de análisis", "Analysis period", "Periodo di analisi", "Período de análise"],
        Label::Profiles => ["Perfiles", "Profiles", "Profili", "Perfis"],
        Label::Platform => ["Plataforma", "Platform", "Piattaforma", "Plataforma"],
        Label::Username => ["Usuario", "Username", "Utente", "Usuário"],
        Label::Active => ["Activo", "Active", "Attivo", "Ativo"],
        Label::Audience => ["Público", "Audience", "Pubblico", "Público"],
        Label::CurrentStyle => ["Estilo actual", "Current style", "Stile attuale", "Estilo atual"],
        Label::DesiredStyle => ["Estilo deseado", "Desired style", "Stile desiderato", "Estilo desejado"],
        Label::Checklist => ["Checklist", "Checklist", "Checklist", "Checklist"],
        Label::Alignment => ["Alineación de marca", "Brand alignment", "Allineamento al brand", "Alinhamento de marca"],
        Label::Metrics => ["Métricas", "Metrics", "Metriche", "Métricas"],
        Label::AdsEnabled => ["Anuncios", "Ads", "Annunci", "Anúncios"],
        Label::NoBrands => ["No hay marcas en este mercado", "No brands in this market", "Nessun brand in questo mercato", "Nenhuma marca neste mercado"],
        Label::Yes => ["Sí", "Yes", "Sì", "Sim"],
        Label::No => ["No", "No", "No", "Não"],
        Label::Partial => ["Parcial", "Partial", "Parziale", "Parcial"],
        Label::TotalBudget => ["Presupuesto total", "Total budget", "Budget totale", "Orçamento total"],
        Label::TotalFollowers => ["Seguidores totales", "Total followers", "Follower totali", "Seguidores totais"],
        Label::AvgEngagement => ["Engagement medio", "Avg. engagement", "Engagement medio", "Engajamento médio"],
        Label::ActiveRecommendations => ["Recomendaciones", "Recommendations", "Raccomandazioni", "Recomendações"],
        Label::BudgetByMarket => ["Presupuesto por mercado", "Budget by market", "Budget per mercato", "Orçamento por mercado"],
        Label::BudgetByPlatform => ["Presupuesto por plataforma", "Budget by platform", "Budget per piattaforma", "Orçamento por plataforma"],
        Label::NoSpend => ["Sin inversión registrada", "No spend recorded", "Nessuna spesa registrata", "Sem investimento registrado"],
        Label::CopySummary => ["Copiar resumen", "Copy summary", "Copia riepilogo", "Copiar resumo"],
        Label::Copied => ["¡Copiado!", "Copied!", "Copiato!", "Copiado!"],
        Label::NewRecommendation => ["Nueva recomendación", "New recommendation", "Nuova raccomandazione", "Nova recomendação"],
        Label::Brand => ["Marca", "Brand", "Brand", "Marca"],
        Label::Scope => ["Mercado", "Market", "Mercato", "Mercado"],
        Label::Area => ["Área", "Area", "Area", "Área"],
        Label::Problem => ["Problema", "Problem", "Problema", "Problema"],
        Label::Action => ["Acción", "Action", "Azione", "Ação"],
        Label::Priority => ["Prioridad", "Priority", "Priorità", "Prioridade"],
        Label::Add => ["Añadir", "Add", "Aggiungi", "Adicionar"],
        Label::Delete => ["Eliminar", "Delete", "Elimina", "Excluir"],
        Label::DraftIncomplete => ["Área y acción son obligatorias", "Area and action are required", "Area e azione sono obbligatorie", "Área e ação são obrigatórias"],
        Label::NoRecommendations => ["Aún no hay recomendaciones", "No recommendations yet", "Ancora nessuna raccomandazione", "Ainda não há recomendações"],
        Label::High => ["Alta", "High", "Alta", "Alta"],
        Label::Medium => ["Media", "Medium", "Media", "Média"],
        Label::Low => ["Baja", "Low", "Bassa", "Baixa"],
        Label::AccessDenied => ["Acceso denegado", "Access denied", "Accesso negato", "Acesso negado"],
        Label::AccessDeniedHint => ["Esta demo privada requiere un enlace con clave válida.", "This private demo requires a link with a valid key.", "Questa demo privata richiede un link con chiave valida.", "Esta demo privada requer um link com chave válida."],
    }
}

fn pick(lang: Language, texts: [&'static str; 4]) -> &'static str {
    match lang {
        Language::Es => texts[0],
        Language::En => texts[1],
        Language::It => texts[2],
        Language::Pt => texts[3],
    }
}

pub fn tr(lang: Language, label: Label) -> &'static str {
    pick(lang, entries(label))
}

pub fn country_name(lang: Language, country: CountryId) -> &'static str {
    let texts = match country {
        CountryId::Es => ["España", "Spain", "Spagna", "Espanha"],
        CountryId::Br => ["Brasil", "Brazil", "Brasile", "Brasil"],
        CountryId::It => ["Italia", "Italy", "Italia", "Itália"],
    };
    pick(lang, texts)
}

pub fn scope_name(lang: Language, scope: RecommendationScope) -> &'static str {
    match scope {
        RecommendationScope::General => tr(lang, Label::General),
        RecommendationScope::Country(country) => country_name(lang, country),
    }
}

pub fn tri_state_label(lang: Language, value: TriState) -> &'static str {
    match value {
        TriState::Yes => tr(lang, Label::Yes),
        TriState::No => tr(lang, Label::No),
        TriState::Partial => tr(lang, Label::Partial),
    }
}

pub fn priority_label(lang: Language, value: Priority) -> &'static str {
    match value {
        Priority::High => tr(lang, Label::High),
        Priority::Medium => tr(lang, Label::Medium),
        Priority::Low => tr(lang, Label::Low),
    }
}

pub fn period_label(lang: Language, period: AnalysisPeriod) -> &'static str {
    let texts = match period {
        AnalysisPeriod::Last30Days => ["Últimos 30 días", "Last 30 days", "Ultimi 30 giorni", "Últimos 30 dias"],
        AnalysisPeriod::Last90Days => ["Últimos 90 días", "Last 90 days", "Ultimi 90 giorni", "Últimos 90 dias"],
        AnalysisPeriod::Last180Days => ["Últimos 180 días", "Last 180 days", "Ultimi 180 giorni", "Últimos 180 dias"],
        AnalysisPeriod::Last365Days => ["Último año", "Last year", "Ultimo anno", "Último ano"],
    };
    pick(lang, texts)
}

pub fn organic_label(lang: Language, field: OrganicField) -> &'static str {
    let texts = match field {
        OrganicField::Followers => ["Seguidores", "Followers", "Follower", "Seguidores"],
        OrganicField::AvgMonthlyPosts => ["Posts/mes", "Posts/month", "Post/mese", "Posts/mês"],
        OrganicField::Reach => ["Alcance", "Reach", "Copertura", "Alcance"],
        OrganicField::Impressions => ["Impresiones", "Impressions", "Impression", "Impressões"],
        OrganicField::Interactions => ["Interacciones", "Interactions", "Interazioni", "Interações"],
        OrganicField::EngagementRate => ["Engagement %", "Engagement %", "Engagement %", "Engajamento %"],
        OrganicField::ProfileVisits => ["Visitas al perfil", "Profile visits", "Visite al profilo", "Visitas ao perfil"],
        OrganicField::Clicks => ["Clics", "Clicks", "Clic", "Cliques"],
        OrganicField::Posts => ["Posts", "Posts", "Post", "Posts"],
        OrganicField::Reels => ["Reels", "Reels", "Reel", "Reels"],
        OrganicField::Videos => ["Vídeos", "Videos", "Video", "Vídeos"],
        OrganicField::Stories => ["Stories", "Stories", "Storie", "Stories"],
        OrganicField::VideoViews => ["Reproducciones", "Video views", "Visualizzazioni", "Visualizações"],
    };
    pick(lang, texts)
}

pub fn paid_label(lang: Language, field: PaidField) -> &'static str {
    let texts = match field {
        PaidField::Budget => ["Presupuesto €", "Budget €", "Budget €", "Orçamento €"],
        PaidField::AvgMonthlyBudget => ["Media mensual €", "Monthly avg. €", "Media mensile €", "Média mensal €"],
        PaidField::Cpc => ["CPC €", "CPC €", "CPC €", "CPC €"],
        PaidField::Ctr => ["CTR %", "CTR %", "CTR %", "CTR %"],
        PaidField::Conversions => ["Conversiones", "Conversions", "Conversioni", "Conversões"],
        PaidField::Cpl => ["CPL €", "CPL €", "CPL €", "CPL €"],
    };
    pick(lang, texts)
}

pub fn checklist_label(lang: Language, item: ChecklistItem) -> &'static str {
    let texts = match item {
        ChecklistItem::BioOptimized => ["Bio optimizada", "Optimized bio", "Bio ottimizzata", "Bio otimizada"],
        ChecklistItem::LinkInBio => ["Enlace en bio", "Link in bio", "Link in bio", "Link na bio"],
        ChecklistItem::HighlightsOrganized => ["Destacados", "Highlights", "In evidenza", "Destaques"],
        ChecklistItem::Verified => ["Verificado", "Verified", "Verificato", "Verificado"],
    };
    pick(lang, texts)
}

pub fn alignment_label(lang: Language, aspect: AlignmentAspect) -> &'static str {
    let texts = match aspect {
        AlignmentAspect::Colors => ["Colores", "Colors", "Colori", "Cores"],
        AlignmentAspect::Typography => ["Tipografía", "Typography", "Tipografia", "Tipografia"],
        AlignmentAspect::Tone => ["Tono", "Tone", "Tono", "Tom"],
    };
    pick(lang, texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_language() {
        assert_eq!(tr(Language::En, Label::Dashboard), "Dashboard");
        assert_eq!(tr(Language::Pt, Label::Dashboard), "Painel");
        assert_eq!(country_name(Language::It, CountryId::Br), "Brasile");
    }

    #[test]
    fn general_scope_uses_general_label() {
        assert_eq!(scope_name(Language::Es, RecommendationScope::General), "General");
        assert_eq!(
            scope_name(Language::En, RecommendationScope::Country(CountryId::Es)),
            "Spain"
        );
    }
}
