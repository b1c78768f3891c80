//! The crawl orchestrator.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use lex_core::lemma;
use lex_core::rejection::{RejectionReason, RejectionRecord};
use lex_core::source::{CandidateSource, DictionarySource, ExclusionLog, ExistenceIndex};
use lex_infer::{extract_conjugations, infer_forms};

use crate::error::CrawlError;

/// Counters accumulated over one crawl run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Listing pages fetched.
    pub pages: u32,
    /// Titles seen across all pages.
    pub candidates: u64,
    /// Record lines written.
    pub accepted: u64,
    /// Rejections recorded this run.
    pub rejected: u64,
    /// Titles skipped because a previous pass already rejected them.
    pub skipped: u64,
}

/// Drives the crawl pipeline over injected collaborators.
///
/// Per candidate title, in order: skip if the exclusion log already holds
/// it, validate the spelling and the irregular set, ask the existence index
/// (memoized for the run), then fetch the entry and run the inference
/// engine. Inference failures and gate rejections land on the exclusion log;
/// accepted lemmas become one `~`-separated line on the record stream.
///
/// The record stream carries records only. Diagnostics go through `tracing`,
/// which the binary points at stderr.
#[derive(Debug)]
pub struct Crawler<S, X, D, L> {
    source: S,
    index: X,
    dictionary: D,
    exclusions: L,
    irregulars: HashSet<String>,
    language: String,
    max_pages: Option<u32>,
    existence_memo: HashMap<String, bool>,
}

impl<S, X, D, L> Crawler<S, X, D, L>
where
    S: CandidateSource,
    X: ExistenceIndex,
    D: DictionarySource,
    L: ExclusionLog,
{
    pub fn new(
        source: S,
        index: X,
        dictionary: D,
        exclusions: L,
        irregulars: HashSet<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            source,
            index,
            dictionary,
            exclusions,
            irregulars,
            language: language.into(),
            max_pages: None,
            existence_memo: HashMap::new(),
        }
    }

    /// Stop after `max_pages` listing pages; `None` runs to exhaustion.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Run the crawl, writing accepted records to `out`.
    ///
    /// # Errors
    ///
    /// [`CrawlError`] when a collaborator fails past its retry policy, the
    /// exclusion log cannot be extended, or `out` cannot be written. Per-lemma
    /// rejections are not errors.
    pub async fn run(&mut self, out: &mut impl Write) -> Result<CrawlReport, CrawlError> {
        let mut report = CrawlReport::default();
        let mut continuation: Option<String> = None;

        loop {
            let page = self.source.next_page(continuation.as_deref()).await?;
            report.pages += 1;
            tracing::info!(
                page = report.pages,
                titles = page.titles.len(),
                "fetched listing page"
            );

            for title in &page.titles {
                report.candidates += 1;
                self.process(title, out, &mut report).await?;
            }

            continuation = page.continuation;
            if continuation.is_none() {
                tracing::info!("listing exhausted");
                break;
            }
            if self.max_pages.is_some_and(|max| report.pages >= max) {
                tracing::info!(max_pages = ?self.max_pages, "page cap reached");
                break;
            }
        }

        Ok(report)
    }

    async fn process(
        &mut self,
        title: &str,
        out: &mut impl Write,
        report: &mut CrawlReport,
    ) -> Result<(), CrawlError> {
        if self.exclusions.contains(title) {
            tracing::debug!(title, "already excluded, skipping");
            report.skipped += 1;
            return Ok(());
        }

        if let Err(reason) = lemma::validate(title, &self.irregulars) {
            return self.reject(title, reason, report);
        }

        if self.cached_exists(title).await? {
            return self.reject(title, RejectionReason::AlreadyExists, report);
        }

        let wikitext = self.dictionary.fetch_entry(title).await?;
        let templates = extract_conjugations(&wikitext);
        match infer_forms(title, &templates) {
            Ok(forms) => {
                writeln!(out, "{}", forms.to_record())?;
                report.accepted += 1;
                tracing::info!(title, "accepted");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(title, %error, "inference failed");
                self.reject(title, error.reason(), report)
            }
        }
    }

    async fn cached_exists(&mut self, term: &str) -> Result<bool, CrawlError> {
        if let Some(&exists) = self.existence_memo.get(term) {
            return Ok(exists);
        }
        let exists = self.index.exists(term, &self.language).await?;
        self.existence_memo.insert(term.to_string(), exists);
        Ok(exists)
    }

    fn reject(
        &mut self,
        title: &str,
        reason: RejectionReason,
        report: &mut CrawlReport,
    ) -> Result<(), CrawlError> {
        let rejection = RejectionRecord::new(title, reason);
        tracing::warn!(title, %reason, "rejected");
        self.exclusions.record(&rejection)?;
        report.rejected += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use lex_core::errors::{SourceError, StoreError};
    use lex_core::source::CandidatePage;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Serves pre-built pages; page N links to page N+1 via token `N+1`.
    struct FixedSource {
        pages: Vec<Vec<&'static str>>,
    }

    impl CandidateSource for FixedSource {
        async fn next_page(
            &self,
            continuation: Option<&str>,
        ) -> Result<CandidatePage, SourceError> {
            let index: usize = match continuation {
                None => 0,
                Some(token) => token
                    .parse()
                    .map_err(|_| SourceError::Malformed("bad continuation".to_string()))?,
            };
            let titles = self.pages[index].iter().map(ToString::to_string).collect();
            let continuation = (index + 1 < self.pages.len()).then(|| (index + 1).to_string());
            Ok(CandidatePage {
                titles,
                continuation,
            })
        }
    }

    struct SetIndex {
        existing: HashSet<String>,
        queries: RefCell<Vec<String>>,
    }

    impl SetIndex {
        fn new(existing: &[&str]) -> Self {
            Self {
                existing: existing.iter().map(ToString::to_string).collect(),
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl ExistenceIndex for SetIndex {
        async fn exists(&self, term: &str, language: &str) -> Result<bool, SourceError> {
            assert_eq!(language, "en");
            self.queries.borrow_mut().push(term.to_string());
            Ok(self.existing.contains(term))
        }
    }

    struct MapDictionary {
        entries: HashMap<String, String>,
    }

    impl MapDictionary {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                entries: entries
                    .iter()
                    .map(|(title, text)| ((*title).to_string(), (*text).to_string()))
                    .collect(),
            }
        }
    }

    impl DictionarySource for MapDictionary {
        async fn fetch_entry(&self, title: &str) -> Result<String, SourceError> {
            self.entries
                .get(title)
                .cloned()
                .ok_or_else(|| SourceError::Malformed(format!("no fixture entry for {title}")))
        }
    }

    #[derive(Default)]
    struct MemoryLog {
        lemmas: HashSet<String>,
        records: Vec<RejectionRecord>,
    }

    impl ExclusionLog for MemoryLog {
        fn contains(&self, lemma: &str) -> bool {
            self.lemmas.contains(lemma)
        }

        fn record(&mut self, rejection: &RejectionRecord) -> Result<(), StoreError> {
            self.lemmas.insert(rejection.lemma.clone());
            self.records.push(rejection.clone());
            Ok(())
        }
    }

    fn crawler(
        pages: Vec<Vec<&'static str>>,
        existing: &[&str],
        entries: &[(&str, &str)],
        excluded: &[&str],
    ) -> Crawler<FixedSource, SetIndex, MapDictionary, MemoryLog> {
        let log = MemoryLog {
            lemmas: excluded.iter().map(ToString::to_string).collect(),
            records: Vec::new(),
        };
        Crawler::new(
            FixedSource { pages },
            SetIndex::new(existing),
            MapDictionary::new(entries),
            log,
            ["shew".to_string()].into_iter().collect(),
            "en",
        )
    }

    #[tokio::test]
    async fn one_new_lemma_emits_exactly_one_record() {
        let mut crawler = crawler(
            vec![vec!["zorb"]],
            &[],
            &[("zorb", "==English==\n{{en-verb}}\n")],
            &[],
        );
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "zorb~zorbs~zorbed~zorbing~zorbed\n"
        );
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 0);
        assert!(crawler.exclusions.records.is_empty());
    }

    #[tokio::test]
    async fn inference_failure_rejects_instead_of_emitting() {
        // Two templates on one entry: ambiguous.
        let mut crawler = crawler(
            vec![vec!["zorble"]],
            &[],
            &[("zorble", "{{en-verb}} and {{en-verb|zorbl|es}}")],
            &[],
        );
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert!(out.is_empty(), "rejections never reach the record stream");
        assert_eq!(report.rejected, 1);
        assert_eq!(
            crawler.exclusions.records,
            vec![RejectionRecord::new(
                "zorble",
                RejectionReason::AmbiguousTemplate
            )]
        );
    }

    #[tokio::test]
    async fn gates_run_before_any_fetch() {
        // Neither title has a dictionary fixture; reaching the fetch would
        // fail the run.
        let mut crawler = crawler(vec![vec!["give up", "shew"]], &[], &[], &[]);
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(report.rejected, 2);
        assert_eq!(
            crawler.exclusions.records[0].reason,
            RejectionReason::InvalidSpelling
        );
        assert_eq!(
            crawler.exclusions.records[1].reason,
            RejectionReason::KnownIrregular
        );
        assert!(crawler.index.queries.borrow().is_empty());
    }

    #[tokio::test]
    async fn existing_lexemes_are_rejected_without_a_fetch() {
        let mut crawler = crawler(vec![vec!["walk"]], &["walk"], &[], &[]);
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(report.rejected, 1);
        assert_eq!(
            crawler.exclusions.records,
            vec![RejectionRecord::new("walk", RejectionReason::AlreadyExists)]
        );
    }

    #[tokio::test]
    async fn excluded_titles_are_skipped_silently() {
        let mut crawler = crawler(vec![vec!["zorble"]], &[], &[], &["zorble"]);
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.rejected, 0);
        assert!(crawler.exclusions.records.is_empty(), "no re-recording");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn pagination_follows_continuations_to_exhaustion() {
        let mut crawler = crawler(
            vec![vec!["zorble"], vec!["abseil"], vec!["quaff"]],
            &["zorble", "abseil", "quaff"],
            &[],
            &[],
        );
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(report.pages, 3);
        assert_eq!(report.candidates, 3);
    }

    #[tokio::test]
    async fn page_cap_stops_early() {
        let mut crawler = crawler(
            vec![vec!["zorble"], vec!["abseil"], vec!["quaff"]],
            &["zorble", "abseil", "quaff"],
            &[],
            &[],
        )
        .with_max_pages(Some(2));
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(report.pages, 2);
        assert_eq!(report.candidates, 2);
    }

    #[tokio::test]
    async fn existence_queries_are_memoized_per_run() {
        // A listing can repeat a title across pages; the index is asked once.
        let mut crawler = crawler(
            vec![vec!["zorble"], vec!["zorble"]],
            &[],
            &[("zorble", "{{en-verb}}")],
            &[],
        );
        let mut out = Vec::new();

        let report = crawler.run(&mut out).await.unwrap();
        assert_eq!(report.accepted, 2);
        assert_eq!(crawler.index.queries.borrow().len(), 1);
    }

    #[tokio::test]
    async fn malformed_source_aborts_the_run() {
        let mut crawler = crawler(vec![vec!["zorble"]], &[], &[], &[]);
        let mut out = Vec::new();

        // zorble passes every gate but has no dictionary fixture, so the
        // fetch surfaces Malformed and the run dies.
        let error = crawler.run(&mut out).await.unwrap_err();
        assert!(matches!(
            error,
            CrawlError::Source(SourceError::Malformed(_))
        ));
    }
}
