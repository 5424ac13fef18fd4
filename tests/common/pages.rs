//! HTML page fixtures

use nativeform_client::page::HtmlPage;

/// A page whose head carries `token` as its anti-forgery token
pub fn page_with_token(token: &str) -> HtmlPage {
    HtmlPage::parse(&format!(
        r#"<!DOCTYPE html><html><head><title>Native-Form</title><meta name="csrf-token" content="{}"></head><body></body></html>"#,
        token
    ))
}

/// A page without any anti-forgery token
pub fn page_without_token() -> HtmlPage {
    HtmlPage::parse(
        "<!DOCTYPE html><html><head><title>Native-Form</title></head><body></body></html>",
    )
}

/// A sortable table page with one header per column and the given rows
pub fn sortable_page(headers: &[&str], rows: &[Vec<&str>]) -> HtmlPage {
    let head: String = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{}</td>", c)).collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    HtmlPage::parse(&format!(
        "<html><body><table data-sortable><thead><tr>{}</tr></thead><tbody>{}</tbody></table></body></html>",
        head, body
    ))
}
