use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use search_core::{DocId, SearchConfig, SearchHit, SearchServer};
use serde::Serialize;
use std::io::BufRead;

/// One run of the line protocol: stop-words, document count, documents, query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub stop_words: String,
    pub documents: Vec<String>,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub num_docs: usize,
    pub results: &'a [SearchHit],
}

/// Read a session.
///
/// Input that ends early leaves the remaining documents out and the query
/// empty; a missing query line reads as empty.
pub fn read_session<R: BufRead>(reader: R) -> Result<Session> {
    let mut lines = reader.lines();
    let mut next_line = move || -> Result<Option<String>> {
        lines.next().transpose().context("failed to read input line")
    };

    let stop_words = next_line()?.unwrap_or_default();
    let count_line = next_line()?.unwrap_or_default();
    let count = parse_document_count(&count_line)?;

    let mut documents = Vec::new();
    while documents.len() < count {
        match next_line()? {
            Some(line) => documents.push(line),
            None => {
                tracing::warn!(expected = count, read = documents.len(), "input ended before all documents");
                break;
            }
        }
    }
    let query = next_line()?.unwrap_or_default();
    Ok(Session { stop_words, documents, query })
}

/// Leading decimal digits of the line; anything after them is ignored.
pub fn parse_document_count(line: &str) -> Result<usize> {
    let trimmed = line.trim_start();
    let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        bail!("invalid document count: {line:?}");
    }
    let count: u64 = digits
        .parse()
        .with_context(|| format!("document count out of range: {digits}"))?;
    if count > u64::from(DocId::MAX) + 1 {
        bail!("document count {count} exceeds the document id range");
    }
    usize::try_from(count).with_context(|| format!("document count out of range: {count}"))
}

impl Session {
    /// Index the session's documents under ids `0..n`.
    pub fn build_server(&self, config: SearchConfig) -> Result<SearchServer> {
        let mut server = SearchServer::new(config);
        server.set_stop_words(&self.stop_words);
        for (i, text) in self.documents.iter().enumerate() {
            let doc_id = DocId::try_from(i).context("too many documents")?;
            server.add_document(doc_id, text);
        }
        tracing::info!(num_docs = server.document_count(), num_terms = server.index().num_terms(), "indexed session");
        Ok(server)
    }
}

pub fn render(format: OutputFormat, query: &str, num_docs: usize, hits: &[SearchHit]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(hits)),
        OutputFormat::Json => {
            let response = SearchResponse { query, num_docs, results: hits };
            Ok(serde_json::to_string_pretty(&response)? + "\n")
        }
    }
}

pub fn render_text(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|h| format!("{{ document_id = {}, relevance = {} }}\n", h.doc_id, format_relevance(h.relevance)))
        .collect()
}

/// Format like `printf("%g")`: six significant digits, trailing zeros dropped,
/// scientific notation below 1e-4 or from 1e6 up.
pub fn format_relevance(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{value:.5e}");
    let Some((mantissa, exp)) = sci.split_once('e') else { return value.to_string() };
    let Ok(exp) = exp.parse::<i32>() else { return value.to_string() };
    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_printf_g() {
        assert_eq!(format_relevance(0.6506724213610959), "0.650672");
        assert_eq!(format_relevance(0.1013662770270411), "0.101366");
        assert_eq!(format_relevance(0.0), "0");
        assert_eq!(format_relevance(0.5), "0.5");
        assert_eq!(format_relevance(2.0), "2");
        assert_eq!(format_relevance(123456.7), "123457");
        assert_eq!(format_relevance(1234567.0), "1.23457e+06");
        assert_eq!(format_relevance(0.0001), "0.0001");
        assert_eq!(format_relevance(0.00001234), "1.234e-05");
        assert_eq!(format_relevance(-1.0), "-1");
    }

    #[test]
    fn text_lines() {
        let hits = [SearchHit { doc_id: 1, relevance: 0.25 }, SearchHit { doc_id: 0, relevance: 0.125 }];
        assert_eq!(
            render_text(&hits),
            "{ document_id = 1, relevance = 0.25 }\n{ document_id = 0, relevance = 0.125 }\n"
        );
    }
}
