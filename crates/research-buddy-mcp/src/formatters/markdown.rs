//! Markdown output formatting.

use std::borrow::Cow;

use crate::models::{AuthorDetails, Paper, PaperSearchResult};

/// Abstracts longer than this are cut in Markdown output.
const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Format a list of papers as Markdown.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a search result page as Markdown, with pagination hints.
#[must_use]
pub fn format_search_markdown(result: &PaperSearchResult) -> String {
    if result.data.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!(
        "# Search results ({} of {} total, offset {})\n\n",
        result.data.len(),
        result.total,
        result.offset
    );

    for (i, paper) in result.data.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, result.offset as usize + i + 1));
        output.push_str("\n---\n\n");
    }

    if let Some(next) = result.next {
        output.push_str(&format!("_More results available from offset {next}._\n"));
    }

    output
}

/// Format a single paper as Markdown. An index of 0 omits the numbering.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    // Title
    if index > 0 {
        output.push_str(&format!("## {}. {}\n\n", index, paper.title));
    } else {
        output.push_str(&format!("## {}\n\n", paper.title));
    }

    // Authors
    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    // Year and citations
    let mut meta = Vec::new();
    if let Some(year) = paper.year {
        meta.push(format!("**Year**: {year}"));
    }
    meta.push(format!("**Citations**: {}", paper.citation_count));

    if paper.influential_citation_count > 0 {
        meta.push(format!("**Influential**: {}", paper.influential_citation_count));
    }

    if let Some(venue) = paper.venue.as_deref().filter(|v| !v.is_empty()) {
        meta.push(format!("**Venue**: {venue}"));
    }

    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    // Links
    let mut links = Vec::new();
    if let Some(url) = &paper.url {
        links.push(format!("[S2]({url})"));
    } else if let Some(id) = &paper.paper_id {
        links.push(format!("[S2](https://www.semanticscholar.org/paper/{id})"));
    }
    if let Some(pdf_url) = paper.pdf_url() {
        links.push(format!("[PDF]({pdf_url})"));
    }

    if !links.is_empty() {
        output.push_str(&format!("**Links**: {}\n\n", links.join(" | ")));
    }

    // TLDR
    if let Some(tldr) = paper.tldr_text() {
        output.push_str(&format!("> **TLDR**: {tldr}\n\n"));
    }

    // Abstract (truncated)
    if let Some(abs) = &paper.r#abstract {
        let truncated: Cow<'_, str> = match abs.char_indices().nth(ABSTRACT_PREVIEW_CHARS) {
            Some((cut, _)) => Cow::Owned(format!("{}...", &abs[..cut])),
            None => Cow::Borrowed(abs),
        };
        output.push_str(&format!("**Abstract**: {truncated}\n"));
    }

    output
}

/// Format an author profile as Markdown.
#[must_use]
pub fn format_author_markdown(author: &AuthorDetails) -> String {
    let mut output = format!("## {}\n\n", author.name);

    // Affiliations
    if !author.affiliations.is_empty() {
        output.push_str(&format!("**Affiliations**: {}\n\n", author.affiliations.join(", ")));
    }

    // Metrics
    let metrics = [
        format!("**h-index**: {}", author.h_index),
        format!("**Citations**: {}", author.citation_count),
        format!("**Papers**: {}", author.paper_count),
    ];
    output.push_str(&format!("{}\n\n", metrics.join(" | ")));

    // S2 link
    if let Some(id) = &author.author_id {
        output.push_str(&format!(
            "**S2 Profile**: [View](https://www.semanticscholar.org/author/{id})\n\n"
        ));
    }

    if !author.papers.is_empty() {
        output.push_str(&format!("### Papers ({})\n\n", author.papers.len()));
        for paper in &author.papers {
            match paper.year {
                Some(year) => output.push_str(&format!("- {} ({year})\n", paper.title)),
                None => output.push_str(&format!("- {}\n", paper.title)),
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OpenAccessPdf, Tldr};

    #[test]
    fn test_paper_markdown_contains_details() {
        let paper = Paper {
            paper_id: Some("abc".to_string()),
            title: "Attention Is All You Need".to_string(),
            year: Some(2017),
            citation_count: 100_000,
            venue: Some("NeurIPS".to_string()),
            tldr: Some(Tldr { model: None, text: "Transformers.".to_string() }),
            open_access_pdf: Some(OpenAccessPdf {
                url: "https://arxiv.org/pdf/1706.03762".to_string(),
                status: None,
            }),
            ..Default::default()
        };

        let md = format_paper_markdown(&paper, 1);
        assert!(md.starts_with("## 1. Attention Is All You Need"));
        assert!(md.contains("**Year**: 2017"));
        assert!(md.contains("**Venue**: NeurIPS"));
        assert!(md.contains("https://www.semanticscholar.org/paper/abc"));
        assert!(md.contains("[PDF](https://arxiv.org/pdf/1706.03762)"));
        assert!(md.contains("**TLDR**: Transformers."));
    }

    #[test]
    fn test_abstract_truncated_on_char_boundary() {
        let paper = Paper { r#abstract: Some("ü".repeat(400)), ..Default::default() };
        let md = format_paper_markdown(&paper, 0);
        assert!(md.contains(&format!("**Abstract**: {}...", "ü".repeat(300))));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_papers_markdown(&[]), "No papers found.");
        assert_eq!(format_search_markdown(&PaperSearchResult::default()), "No papers found.");
    }

    #[test]
    fn test_search_markdown_mentions_next_page() {
        let result = PaperSearchResult {
            total: 25,
            offset: 0,
            next: Some(10),
            data: vec![Paper::default()],
        };
        let md = format_search_markdown(&result);
        assert!(md.contains("1 of 25 total"));
        assert!(md.contains("## 1. Untitled"));
        assert!(md.contains("offset 10"));
    }

    #[test]
    fn test_author_markdown() {
        let author = AuthorDetails {
            author_id: Some("1741101".to_string()),
            name: "Geoffrey Hinton".to_string(),
            affiliations: vec!["University of Toronto".to_string()],
            h_index: 150,
            papers: vec![Paper { title: "Deep learning".to_string(), year: Some(2015), ..Default::default() }],
            ..Default::default()
        };

        let md = format_author_markdown(&author);
        assert!(md.starts_with("## Geoffrey Hinton"));
        assert!(md.contains("**h-index**: 150"));
        assert!(md.contains("University of Toronto"));
        assert!(md.contains("- Deep learning (2015)"));
    }
}
