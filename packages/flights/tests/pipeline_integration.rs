//! End-to-end tests: raw fragments through ranking, rendering, prompt
//! formatting, and artifact persistence.

use flights::testing::{sample_listing, MockListingSource, MockSummarizer};
use flights::{
    format_summarize_prompt, FsArtifactStore, MemoryArtifactStore, Pipeline, PipelineConfig,
    RawListing, SearchQuery, Summarizer as _, DEFAULT_QUOTE_ROWS,
};

#[test]
fn full_run_orders_table_by_price() {
    let batch = vec![
        sample_listing("Delta", "$500"),
        sample_listing("United", "$200"),
        sample_listing("American", "$350"),
    ];

    let output = Pipeline::default().process(&batch);

    let prices: Vec<u32> = output.records.iter().map(|r| r.price_value).collect();
    assert_eq!(prices, vec![200, 350, 500]);

    // The table lists rows in the same order.
    let united = output.table.find("United").unwrap();
    let american = output.table.find("American").unwrap();
    let delta = output.table.find("Delta").unwrap();
    assert!(united < american && american < delta);

    let header = output.table.lines().nth(1).unwrap();
    assert!(header.starts_with("| Airline"));
    assert!(header.contains("| Price") && header.contains("| Arrival"));
}

#[test]
fn duplicates_collapse_to_first_seen() {
    let mut second = sample_listing("Delta", "$341");
    second.duration_text = "5 hr 45 min".to_string();

    let output = Pipeline::default().process(&[sample_listing("Delta", "$341"), second]);

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].duration, "2 hr 10 min");
}

#[test]
fn noisy_fragments_come_out_clean() {
    let listing = RawListing::new()
        .with_departure("8:00â€¯AMChicagoO'HareAirport ORD")
        .with_arrival("2:35PM")
        .with_airline("8:00 AM\n2:35 PM\nround trip\nUnited")
        .with_duration("7h30min ORD–CDG")
        .with_stops("Nonstop\nvia nowhere")
        .with_price("from $1,024 round trip");

    let output = Pipeline::default().process(std::slice::from_ref(&listing));
    let record = &output.records[0];

    assert_eq!(record.departure, "8:00 AM Chicago O'Hare Airport, ORD");
    assert_eq!(record.arrival, "2:35 PM");
    assert_eq!(record.airline, "United");
    assert_eq!(record.duration, "7h30 min");
    assert_eq!(record.stops, "Nonstop");
    assert_eq!(record.price_display, "$1,024");
    assert_eq!(record.price_value, 1024);
}

#[test]
fn garbage_batch_is_filtered_not_fatal() {
    let batch = vec![
        RawListing::new(),
        RawListing::new().with_airline("\u{fffd}\u{fffd}").with_price("$"),
        RawListing::new().with_airline("1045").with_price("$300"),
        RawListing::new().with_price("no price at all"),
        sample_listing("Delta", "$341"),
    ];

    let output = Pipeline::default().process(&batch);

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].airline, "Delta");
}

#[test]
fn empty_batch_yields_empty_success() {
    let output = Pipeline::default().process(&[]);

    assert!(output.is_empty());
    assert_eq!(output.table, "");

    // An empty run writes nothing.
    let store = MemoryArtifactStore::new();
    output.persist(&store).unwrap();
    assert!(store.records().is_none());
    assert!(store.table().is_none());
}

#[test]
fn persist_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsArtifactStore::new(dir.path());

    let output = Pipeline::default().process(&[
        sample_listing("Delta", "$341"),
        sample_listing("United", "$389"),
    ]);
    output.persist(&store).unwrap();

    let json = std::fs::read_to_string(store.records_path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["price_number"], 341);
    assert_eq!(parsed[0]["price"], "$341");

    let table = std::fs::read_to_string(store.table_path()).unwrap();
    assert_eq!(table, output.table);
}

#[tokio::test]
async fn source_to_summarizer_flow() {
    let source = MockListingSource::new().with_listings([
        sample_listing("Delta", "$500"),
        sample_listing("United", "$200"),
    ]);
    let summarizer = MockSummarizer::new().with_response("United wins this round.");

    let query = SearchQuery::new("Dallas", "Paris", "Jan 2026");
    assert_eq!(query.month_param(), "2026-01");

    let batch = flights::ListingSource::collect(&source, &query).await.unwrap();
    let output = Pipeline::new(PipelineConfig::default()).process(&batch);

    let prompt = format_summarize_prompt(&output.table, DEFAULT_QUOTE_ROWS);
    let summary = summarizer.summarize(&prompt).await.unwrap();

    assert_eq!(summary, "United wins this round.");
    let prompts = summarizer.prompts();
    assert!(prompts[0].contains("| United "));
    assert!(prompts[0].contains("only the 3 cheapest flights"));
}

#[tokio::test]
async fn failed_source_is_distinct_from_empty_batch() {
    let failing =
        MockListingSource::new().failing(flights::SourceError::Unavailable("no browser".into()));
    let empty = MockListingSource::new();

    let query = SearchQuery::new("Dallas", "Paris", "Jan 2026");

    let err = flights::ListingSource::collect(&failing, &query).await;
    assert!(err.is_err());

    let batch = flights::ListingSource::collect(&empty, &query).await.unwrap();
    assert!(batch.is_empty());
}
