use psico_web::markdown::render;

#[test]
fn headings_and_emphasis_become_html() {
    let html = render("# Title\n\n## Anamnesis\n\nSleeps **badly**, *often*.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<h2>Anamnesis</h2>"));
    assert!(html.contains("<strong>badly</strong>"));
    assert!(html.contains("<em>often</em>"));
}

#[test]
fn lists_and_tables_are_supported() {
    let html = render("- CBT\n- ABA\n\n| Area | Score |\n|---|---|\n| Mood | 3 |\n");
    assert!(html.contains("<li>CBT</li>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>Mood</td>"));
}

#[test]
fn raw_html_is_escaped() {
    let html = render("<script>alert(1)</script>\n\nText with <img src=x onerror=alert(1)> inline.");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&lt;img"));
}

#[test]
fn script_links_are_neutralised() {
    let html = render("[click](javascript:alert(1)) and [docs](https://example.com)");
    assert!(!html.contains("javascript:"));
    assert!(html.contains("href=\"#\""));
    assert!(html.contains("href=\"https://example.com\""));

    let html = render("[x](JavaScript:alert(1))");
    assert!(!html.to_lowercase().contains("javascript:"));
}

#[test]
fn plain_text_becomes_a_paragraph() {
    assert_eq!(render("REPORT_OK"), "<p>REPORT_OK</p>\n");
}
