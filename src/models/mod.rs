pub mod content;
pub mod layout;
pub mod loaders;
pub mod paper;
pub mod plan;
pub mod question;

pub use content::{
    AppClass, AppSubject, Chapter, ChapterQuestions, ContentBlock, TextbookManifest, TextbookPage,
    TextbookUnit,
};
pub use layout::{SpacingPatch, SpacingSettings, Template};
pub use loaders::{load_all_plans, load_paper_plan};
pub use paper::{
    group_by_section, AttemptRule, AttemptRules, PaperQuestion, PaperSettings, PaperState,
    SettingsPatch,
};
pub use plan::{ChapterPick, PaperPlan, TextbookExtract};
pub use question::{CustomQuestion, Difficulty, McqQuestion, Question, QuestionBase, QuestionType};
