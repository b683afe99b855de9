/// Every user-facing text of the application, rendered through `Display`.
#[derive(Debug, Clone)]
pub enum Message {
    // === AUTH MESSAGES ===
    LoginSuccess(String),
    LoggedOut,
    PromptUsername,
    PromptPassword,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskPeriod(String),
    TaskUpdated,
    TaskCompleted(String),
    TaskDeleted,
    ScoreUpdated(i32),
    NoTasksFound,
    ConfirmDeleteTask(String),

    // === JOURNAL MESSAGES ===
    JournalCreated(String),
    JournalUpdated,
    JournalDeleted,
    NoJournalsFound,
    ConfirmDeleteJournal(String),
    PromptJournalContent,

    // === PLAN MESSAGES ===
    PlanViewTitle(String),
    StatsOverview,
    NoTasksInPeriod,
    TaskTreeHeader,
    NoJournalsInPeriod,
    RelatedJournals(usize),
    MoreJournals(usize),

    // === STATS MESSAGES ===
    ScoreTrendTitle(String),
    TrendSummaryHeader,
    NoTrendSummary,
    TrendChartHeader,
    TrendPoint(i64, i64), // score, task count

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,
    ConfigModuleDisplay,
    PromptSelectModules,
    PromptServerApiUrl,
    PromptServerTimeout,
    PromptPageSize,
    PromptJournalPreview,
}
