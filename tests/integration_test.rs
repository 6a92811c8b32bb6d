use paper_builder::browser::BrowserOptions;
use paper_builder::content::{bank, Catalog, FsContentSource, Loaded};
use paper_builder::export::PdfExporter;
use paper_builder::logger;
use paper_builder::models::{PaperPlan, QuestionType, SpacingSettings, Template};
use paper_builder::orchestrator::{build_paper, process_plan, RenderOptions};
use paper_builder::render::render_paper;
use std::fs;
use std::path::{Path, PathBuf};

const CHAPTER_1: &str = r#"{
  "mcqs": [
    {"id":"m1","text":"Unit of force?","marks":1,"page":3,"difficulty":"Easy","options":["Newton","Joule","Watt","Pascal"],"answer":"Newton"}
  ],
  "shorts": [
    {"id":"s1","text":"Define velocity.","marks":2,"page":4,"difficulty":"Easy"},
    {"id":"s2","text":"Define inertia.","marks":2,"page":5,"difficulty":"Hard"},
    {"id":"s3","text":"State the first law of motion.","marks":3,"page":6,"difficulty":"Medium"}
  ],
  "longs": [
    {"id":"l1","text":"Explain the laws of motion with examples.","marks":5,"page":7,"difficulty":"Hard"},
    {"id":"l2","text":"Derive the equations of motion.","marks":8,"page":9,"difficulty":"Hard"}
  ]
}"#;

const MANIFEST: &str = r#"{"totalPages":2,"units":[{"unit":1,"title":"Motion","startPage":1,"endPage":2}]}"#;

const PAGE_1: &str = r#"{"content":[
  {"type":"unit-header","unit":1,"title":"Motion"},
  {"type":"paragraph","text":"A body is in motion when it changes position."},
  {"type":"paragraph","content":[{"type":"bold","text":"Uniform motion: "},{"text":"a body covering equal distances in equal intervals of time, however short those intervals may be, is said to be in uniform motion along a straight line."}]}
]}"#;

/// 在临时目录中搭建一个内容库
struct Fixture {
    root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("paper_builder_{}", uuid::Uuid::new_v4()));
        let subject = root.join("class-9").join("physics");
        fs::create_dir_all(subject.join("textbook")).unwrap();
        fs::write(root.join("manifest.json"), r#"[{"id":"class-9","title":"Class 9"}]"#).unwrap();
        fs::write(
            root.join("class-9").join("manifest.json"),
            r#"[{"id":"physics","name":"Physics","icon":"atom"}]"#,
        )
        .unwrap();
        fs::write(
            subject.join("manifest.json"),
            r#"[{"id":"chapter-1","title":"Motion"},{"id":"chapter-2","title":"Force"}]"#,
        )
        .unwrap();
        fs::write(subject.join("chapter-1.json"), CHAPTER_1).unwrap();
        fs::write(subject.join("chapter-bad.json"), "{not json").unwrap();
        fs::write(subject.join("textbook").join("manifest.json"), MANIFEST).unwrap();
        fs::write(subject.join("textbook").join("page1.json"), PAGE_1).unwrap();
        // 第 2 页没有 content 字段
        fs::write(subject.join("textbook").join("page2.json"), "{}").unwrap();
        Self { root }
    }

    fn catalog(&self) -> Catalog<FsContentSource> {
        Catalog::new(FsContentSource::new(&self.root))
    }

    fn output_dir(&self) -> PathBuf {
        self.root.join("out")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn plan(toml: &str) -> PaperPlan {
    toml::from_str(toml).unwrap()
}

const FULL_PLAN: &str = r#"
class_id = "class-9"
subject_id = "physics"
file_name = "physics-mid-term"
textbook_units = [1, 7]

[settings]
school_name = "Govt High School"
paper_title = "Physics Mid-Term"

[[picks]]
chapter = "chapter-1"
questions = ["m1", "s1", "s2", "s3", "l1", "l2", "missing-q"]

[[picks]]
chapter = "chapter-404"

[[picks]]
chapter = "chapter-bad"
questions = ["x1"]

[[custom]]
text = "Translate the paragraph into Urdu."
type = "translation"
marks = 5

[marks]
s3 = 4
nope = 2

[attempt]
short = 2
"#;

#[tokio::test]
async fn test_catalog_degrades_instead_of_failing() {
    logger::init();
    let fixture = Fixture::new();
    let catalog = fixture.catalog();

    // 不存在的章节 → 空题库
    match catalog.chapter_questions("class-9", "physics", "chapter-404").await {
        Loaded::Ready(questions) => assert!(bank::is_empty(&questions)),
        other => panic!("unexpected: {:?}", other),
    }

    // JSON 损坏 → 不可用
    let bad = catalog.chapter_questions("class-9", "physics", "chapter-bad").await;
    assert!(matches!(bad, Loaded::Unavailable { .. }));

    // 没有课本 → Ready(None)
    assert_eq!(
        catalog.textbook_manifest("class-9", "maths").await,
        Loaded::Ready(None)
    );

    // 不存在的页面 → 空页面
    match catalog.textbook_page("class-9", "physics", 99).await {
        Loaded::Ready(page) => assert!(page.content.is_empty()),
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_catalog_lists() {
    let fixture = Fixture::new();
    let catalog = fixture.catalog();

    let classes = catalog.classes().await.ready().unwrap();
    assert_eq!(classes[0].id, "class-9");
    assert!(classes[0].description.is_empty());

    let subjects = catalog.subjects("class-9").await.ready().unwrap();
    assert_eq!(subjects[0].name, "Physics");

    let chapters = catalog.chapters("class-9", "physics").await.ready().unwrap();
    assert_eq!(chapters.len(), 2);

    // 不存在的科目 → 空列表
    assert_eq!(catalog.chapters("class-9", "history").await, Loaded::Ready(Vec::new()));
}

#[tokio::test]
async fn test_unit_pages_load_in_order() {
    let fixture = Fixture::new();
    let catalog = fixture.catalog();
    let manifest = catalog
        .textbook_manifest("class-9", "physics")
        .await
        .ready()
        .flatten()
        .unwrap();
    assert_eq!(manifest.total_pages, 2);

    let pages = catalog
        .unit_pages("class-9", "physics", &manifest.units[0])
        .await
        .ready()
        .unwrap();
    assert_eq!(pages.iter().map(|p| p.number).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(pages[0].page.content.len(), 3);
    assert!(pages[1].page.content.is_empty());
}

#[tokio::test]
async fn test_build_paper_from_plan() {
    let fixture = Fixture::new();
    let plan = plan(FULL_PLAN);
    let rules = plan.attempt_rules().unwrap();

    let (builder, stats) = build_paper(&fixture.catalog(), &plan, &rules, 1).await;

    assert_eq!(stats.added, 6);
    assert_eq!(stats.custom, 1);
    // missing-q, chapter-bad, nope
    assert_eq!(stats.skipped, 3);

    let paper = builder.paper();
    assert_eq!(paper.settings.paper_title, "Physics Mid-Term");
    assert_eq!(paper.section_count(QuestionType::Mcq), 1);
    assert_eq!(paper.section_count(QuestionType::Short), 3);
    assert_eq!(paper.section_count(QuestionType::Long), 2);
    assert_eq!(paper.section_count(QuestionType::Translation), 1);

    let rule = paper.attempt_rules[&QuestionType::Short];
    assert_eq!((rule.total, rule.attempt), (3, 2));

    // 1 + (4 + 2) + (5 + 8) + 5
    assert_eq!(builder.total_marks(), 25);

    let s3 = builder.paper_id_of("s3").unwrap();
    assert_eq!(paper.find(s3).unwrap().marks, 4);
    assert_eq!(paper.find(s3).unwrap().original_question.marks(), 3);
}

#[tokio::test]
async fn test_difficulty_filter_pick() {
    let fixture = Fixture::new();
    let plan = plan(
        r#"
class_id = "class-9"
subject_id = "physics"

[[picks]]
chapter = "chapter-1"
difficulty = "Hard"
"#,
    );

    let (builder, stats) = build_paper(&fixture.catalog(), &plan, &[], 1).await;
    assert_eq!(stats.added, 3);
    let mut ids = builder.added_question_ids();
    ids.sort();
    assert_eq!(ids, vec!["l1", "l2", "s2"]);
    assert_eq!(builder.total_marks(), 15);
}

#[tokio::test]
async fn test_whole_chapter_pick_keeps_bank_order() {
    let fixture = Fixture::new();
    let plan = plan(
        r#"
class_id = "class-9"
subject_id = "physics"

[[picks]]
chapter = "chapter-1"
"#,
    );

    let (builder, stats) = build_paper(&fixture.catalog(), &plan, &[], 1).await;
    assert_eq!(stats.added, 6);
    assert_eq!(
        builder.added_question_ids(),
        vec!["m1", "s1", "s2", "s3", "l1", "l2"]
    );
}

#[tokio::test]
async fn test_textbook_extracts_become_custom_questions() {
    let fixture = Fixture::new();
    let plan = plan(
        r#"
class_id = "class-9"
subject_id = "physics"

[[extract]]
page = 1
block = 1

[[extract]]
page = 1
block = 2

[[extract]]
page = 1
block = 2
type = "translation"
marks = 7

[[extract]]
page = 1
block = 0

[[extract]]
page = 1
block = 9

[[extract]]
page = 2
block = 0
"#,
    );

    let (builder, stats) = build_paper(&fixture.catalog(), &plan, &[], 1).await;

    // 单元标题也有文本，只有越界和空页面被跳过
    assert_eq!(stats.custom, 4);
    assert_eq!(stats.skipped, 2);

    let paper = builder.paper();
    let short = &paper.questions[0];
    assert_eq!(short.section, QuestionType::Short);
    assert_eq!(short.marks, 2);
    assert_eq!(
        short.original_question.text(),
        "A body is in motion when it changes position."
    );
    assert!(short.original_question.id().starts_with("custom-"));

    let long = &paper.questions[1];
    assert_eq!(long.section, QuestionType::Long);
    assert_eq!(long.marks, 5);
    assert!(long.original_question.text().starts_with("Uniform motion: a body"));

    assert_eq!(paper.questions[2].section, QuestionType::Translation);
    assert_eq!(paper.questions[2].marks, 7);

    assert_eq!(paper.questions[3].original_question.text(), "Motion");

    // 2 + 5 + 7 + 2
    assert_eq!(builder.total_marks(), 16);
}

#[tokio::test]
async fn test_dry_run_writes_html_only() {
    let fixture = Fixture::new();
    let plan = plan(FULL_PLAN);
    let exporter = PdfExporter::new(fixture.output_dir(), BrowserOptions::default());
    let options = RenderOptions {
        default_template: Template::Modern,
        dry_run: true,
        keep_html: false,
    };

    let outcome = process_plan(&fixture.catalog(), &exporter, &plan, options, 1)
        .await
        .unwrap();

    assert_eq!(outcome.total_marks, 25);
    // 试卷 + 单元 1（单元 7 不存在）
    assert_eq!(outcome.files.len(), 2);
    assert!(outcome.files.iter().all(|f| f.extension().unwrap() == "html"));

    let paper_html = read(&fixture.output_dir().join("physics-mid-term.html"));
    assert!(paper_html.contains("Section B: Short Questions (Attempt any 2)"));
    assert!(paper_html.contains("Govt"));

    let unit_html = read(&fixture.output_dir().join("physics-mid-term-unit-1.html"));
    assert!(unit_html.contains("MOTION"));
    assert!(unit_html.contains("A body is in motion when it changes position."));
    assert!(unit_html.contains("<span class=\"page-no\">2</span>"));
}

#[tokio::test]
async fn test_unknown_attempt_section_fails_plan() {
    let fixture = Fixture::new();
    let plan = plan("class_id = \"class-9\"\nsubject_id = \"physics\"\n[attempt]\nessay = 1\n");
    let exporter = PdfExporter::new(fixture.output_dir(), BrowserOptions::default());
    let options = RenderOptions {
        default_template: Template::Default,
        dry_run: true,
        keep_html: false,
    };
    assert!(process_plan(&fixture.catalog(), &exporter, &plan, options, 1)
        .await
        .is_err());
}

#[test]
fn test_load_plan_file_blocking() {
    let fixture = Fixture::new();
    let path = fixture.root.join("plan.toml");
    fs::write(&path, FULL_PLAN).unwrap();

    let plan = tokio_test::block_on(paper_builder::models::load_paper_plan(&path)).unwrap();
    assert_eq!(plan.file_path.as_deref(), Some(path.to_string_lossy().as_ref()));
    assert_eq!(plan.picks.len(), 3);
}

#[tokio::test]
#[ignore] // 默认忽略，需要本机安装 Chromium：cargo test -- --ignored
async fn test_export_pdf_with_browser() {
    logger::init();
    let fixture = Fixture::new();
    let plan = plan(FULL_PLAN);
    let (builder, _) = build_paper(&fixture.catalog(), &plan, &[], 1).await;
    let html = render_paper(builder.paper(), &SpacingSettings::default(), Template::Default);

    let exporter = PdfExporter::new(
        fixture.output_dir(),
        BrowserOptions {
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok(),
        },
    );
    let path = exporter.export(&html, "Physics: Mid/Term").await.expect("导出 PDF 失败");

    assert_eq!(path.file_name().unwrap(), "Physics MidTerm.pdf");
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
