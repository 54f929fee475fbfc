//! Result cards for the terminal: type badge, content preview, metadata
//! and tag line per document.

use colored::{Color, Colorize};

use docsearch_core::types::{Document, DocumentType, Filter, Query};

/// Badge color per file type. The enum is closed, so the match is
/// exhaustive and a new type fails compilation here instead of silently
/// falling back to a default color.
pub fn type_color(doc_type: DocumentType) -> Color {
    match doc_type {
        DocumentType::Pdf => Color::Red,
        DocumentType::Docx => Color::Blue,
        DocumentType::Xlsx => Color::Green,
        DocumentType::Pptx => Color::TrueColor { r: 255, g: 165, b: 0 },
    }
}

pub fn type_icon(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Pdf => "📕",
        DocumentType::Docx => "📘",
        DocumentType::Xlsx => "📗",
        DocumentType::Pptx => "📙",
    }
}

/// Truncate on a character boundary so Thai text never splits
/// mid-codepoint.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{cut}…")
}

pub fn results(docs: &[Document], query: &Query, preview_chars: usize) {
    summary(docs.len(), query);
    if docs.is_empty() {
        println!("  ไม่พบเอกสารที่ตรงกับการค้นหา");
        return;
    }
    println!();
    for doc in docs {
        card(doc, preview_chars);
        println!();
    }
}

fn summary(count: usize, query: &Query) {
    let mut line = format!("พบเอกสาร {} รายการ", count);
    if !query.term.is_empty() {
        line.push_str(&format!(" สำหรับ \"{}\"", query.term));
    }
    if let Filter::Only(category) = &query.category {
        line.push_str(&format!(" (หมวดหมู่: {})", category));
    }
    if let Filter::Only(doc_type) = &query.doc_type {
        line.push_str(&format!(" (ประเภท: {})", doc_type));
    }
    println!("{}", line);
}

fn card(doc: &Document, preview_chars: usize) {
    let badge = doc.doc_type.label().color(type_color(doc.doc_type)).bold();
    println!("  {} {}  [{}]", type_icon(doc.doc_type), doc.title.bold(), badge);
    println!("     {}", preview(&doc.content, preview_chars));
    println!("     📅 {}  {}  โดย: {}", doc.date, doc.size, doc.author);
    println!("     🏷️  {}", doc.tags.join(", "));
}
