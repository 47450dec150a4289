use openalex_authors::aggregate::{aggregate, ProfileSet, WorkFilters};
use openalex_authors::input::parse_works;
use openalex_authors::rank::{rank, score, RankOptions, ResultRow, SortKey, Summary};
use serde_json::{json, Value};

// Helper: one single-author work per entry of `citations`
fn author_works(name: &str, citations: &[u64], orcid: Option<&str>) -> Vec<Value> {
    citations
        .iter()
        .map(|c| {
            json!({
                "cited_by_count": c,
                "primary_topic": {"display_name": "Topic"},
                "authorships": [{"author": {"display_name": name, "orcid": orcid}}],
            })
        })
        .collect()
}

fn profiles_from(values: Vec<Value>) -> ProfileSet {
    let works = parse_works(&Value::Array(values).to_string()).unwrap();
    aggregate(&works, &WorkFilters::new())
}

fn all_rows(sort_key: SortKey) -> RankOptions {
    RankOptions::new()
        .with_min_articles(1)
        .with_max_results(usize::MAX)
        .with_sort_key(sort_key)
}

#[test]
fn test_median_is_lower_median() {
    let mut values = author_works("Even Count", &[10, 5], None);
    values.extend(author_works("Odd Count", &[1, 9, 4], None));
    values.extend(author_works("Four Samples", &[8, 2, 6, 4], None));
    let profiles = profiles_from(values);

    let rows = rank(&profiles, &all_rows(SortKey::Count));
    let median = |author: &str| {
        rows.iter()
            .find(|row| row.author == author)
            .map(|row| row.median_citations)
            .unwrap()
    };

    // sorted [5, 10] -> index 1
    assert_eq!(median("Even Count"), 10);
    // sorted [1, 4, 9] -> index 1
    assert_eq!(median("Odd Count"), 4);
    // sorted [2, 4, 6, 8] -> index 2
    assert_eq!(median("Four Samples"), 6);
}

#[test]
fn test_average_rounds_to_one_decimal() {
    let profiles = profiles_from(author_works("Avg Author", &[1, 2, 2], None));

    let rows = rank(&profiles, &all_rows(SortKey::Count));

    assert_eq!(rows[0].average_citations, 1.7);
}

#[test]
fn test_average_rounds_ties_to_even() {
    let mut values = author_works("Quarter", &[0, 0, 0, 1], None);
    values.extend(author_works("Twenty Nine Quarters", &[7, 7, 7, 8], None));
    let mut twentieth = vec![0; 19];
    twentieth.push(7);
    values.extend(author_works("Seven Twentieths", &twentieth, None));
    let profiles = profiles_from(values);

    let rows = rank(&profiles, &all_rows(SortKey::Count));
    let average = |author: &str| {
        rows.iter()
            .find(|row| row.author == author)
            .map(|row| row.average_citations)
            .unwrap()
    };

    // 1/4, 29/4 and 7/20 all sit on a half and round down to the even digit
    assert_eq!(average("Quarter"), 0.2);
    assert_eq!(average("Twenty Nine Quarters"), 7.2);
    assert_eq!(average("Seven Twentieths"), 0.3);
}

#[test]
fn test_merged_profile_row() {
    let mut values = author_works("José García", &[10], None);
    values.extend(author_works("Jose Garcia", &[5], None));
    let profiles = profiles_from(values);

    let rows = rank(&profiles, &all_rows(SortKey::Count));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author, "José García");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[0].average_citations, 7.5);
}

#[test]
fn test_score_components() {
    assert_eq!(score(12, 6, true), 3);
    assert_eq!(score(10, 5, false), 2);
    assert_eq!(score(9, 4, true), 1);
    assert_eq!(score(1, 0, false), 0);
}

#[test]
fn test_prolific_cited_author_with_orcid_scores_three() {
    let profiles = profiles_from(author_works(
        "Prolific Author",
        &[6; 12],
        Some("https://orcid.org/0000-0000-0000-0001"),
    ));

    let rows = rank(&profiles, &all_rows(SortKey::Score));

    assert_eq!(rows[0].count, 12);
    assert_eq!(rows[0].median_citations, 6);
    assert_eq!(rows[0].score, 3);
    assert_eq!(rows[0].orcid, "https://orcid.org/0000-0000-0000-0001");
}

#[test]
fn test_min_articles_excludes_small_profiles() {
    let mut values = author_works("Three Papers", &[1, 1, 1], None);
    values.extend(author_works("One Paper", &[100], None));
    let profiles = profiles_from(values);

    let rows = rank(&profiles, &RankOptions::new().with_min_articles(3));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author, "Three Papers");
}

#[test]
fn test_author_filter_matches_key_or_display_name() {
    let mut values = author_works("Zoë Smith", &[1], None);
    values.extend(author_works("Mark Jones", &[1], None));
    let profiles = profiles_from(values);

    // "zoe" only appears in the normalized key
    let rows = rank(&profiles, &all_rows(SortKey::Count).with_author_filter("ZOE"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author, "Zoë Smith");

    // "zoë" only appears in the display name
    let rows = rank(&profiles, &all_rows(SortKey::Count).with_author_filter("zoë"));
    assert_eq!(rows.len(), 1);

    let rows = rank(&profiles, &all_rows(SortKey::Count).with_author_filter("nobody"));
    assert!(rows.is_empty());

    let rows = rank(&profiles, &all_rows(SortKey::Count).with_author_filter(""));
    assert_eq!(rows.len(), 2);

    // whitespace is a real filter: both names contain a space
    let rows = rank(&profiles, &all_rows(SortKey::Count).with_author_filter(" "));
    assert_eq!(rows.len(), 2);
    let rows = rank(&profiles, &all_rows(SortKey::Count).with_author_filter("  "));
    assert!(rows.is_empty());
}

#[test]
fn test_sort_by_each_key() {
    let mut values = author_works("Many Papers", &[1, 1, 1, 1], None);
    values.extend(author_works("High Median", &[50, 60], None));
    values.extend(author_works("High Average", &[0, 0, 300], None));
    let profiles = profiles_from(values);

    let order = |key: SortKey| -> Vec<String> {
        rank(&profiles, &all_rows(key))
            .into_iter()
            .map(|row| row.author)
            .collect()
    };

    assert_eq!(order(SortKey::Count), vec!["Many Papers", "High Average", "High Median"]);
    assert_eq!(
        order(SortKey::AverageCitations),
        vec!["High Average", "High Median", "Many Papers"]
    );
    assert_eq!(
        order(SortKey::MedianCitations),
        vec!["High Median", "Many Papers", "High Average"]
    );
}

#[test]
fn test_score_sort_breaks_ties_by_count() {
    let mut values = author_works("Two Papers", &[9, 9], None);
    values.extend(author_works("Three Papers", &[9, 9, 9], None));
    values.extend(author_works("Zero Score", &[0, 0, 0, 0], None));
    let profiles = profiles_from(values);

    let rows = rank(&profiles, &all_rows(SortKey::Score));
    let authors: Vec<&str> = rows.iter().map(|row| row.author.as_str()).collect();

    assert_eq!(authors, vec!["Three Papers", "Two Papers", "Zero Score"]);
}

#[test]
fn test_equal_keys_keep_first_seen_order() {
    let mut values = author_works("First", &[1], None);
    values.extend(author_works("Second", &[1], None));
    values.extend(author_works("Third", &[1], None));
    let profiles = profiles_from(values);

    let rows = rank(&profiles, &all_rows(SortKey::Count));
    let authors: Vec<&str> = rows.iter().map(|row| row.author.as_str()).collect();

    assert_eq!(authors, vec!["First", "Second", "Third"]);
}

#[test]
fn test_truncation_is_prefix_of_full_ranking() {
    let mut values = Vec::new();
    for (i, name) in ["A Author", "B Author", "C Author", "D Author", "E Author"]
        .iter()
        .enumerate()
    {
        values.extend(author_works(name, &vec![i as u64 * 3; i + 1], None));
    }
    let profiles = profiles_from(values);

    for key in [
        SortKey::Count,
        SortKey::AverageCitations,
        SortKey::MedianCitations,
        SortKey::Score,
    ] {
        let full = rank(&profiles, &all_rows(key));
        for limit in 1..=full.len() {
            let limited = rank(&profiles, &all_rows(key).with_max_results(limit));
            assert_eq!(limited.as_slice(), &full[..limit]);
        }
    }
}

#[test]
fn test_dominant_country_and_top_lists() {
    let works = parse_works(
        &json!([
            {"cited_by_count": 1, "primary_topic": {"display_name": "Optics"},
             "primary_location": {"source": {"display_name": "Optica"}},
             "authorships": [
                {"author": {"display_name": "Lead"}, "countries": ["FR", "DE"]},
                {"author": {"display_name": "Helper"}}]},
            {"cited_by_count": 1, "primary_topic": {"display_name": "Lasers"},
             "primary_location": {"source": {"display_name": "Optica"}},
             "authorships": [
                {"author": {"display_name": "Lead"}, "countries": ["DE"]},
                {"author": {"display_name": "Other"}}]}
        ])
        .to_string(),
    )
    .unwrap();
    let profiles = aggregate(&works, &WorkFilters::new());

    let rows = rank(&profiles, &all_rows(SortKey::Count));
    let lead = rows.iter().find(|row| row.author == "Lead").unwrap();

    assert_eq!(lead.country, "Germany");
    assert_eq!(lead.continent, "Europe");
    assert_eq!(lead.top_topics, "Optics, Lasers");
    assert_eq!(lead.top_coauthors, "Helper, Other");
    assert_eq!(lead.top_journals, "Optica");

    let helper = rows.iter().find(|row| row.author == "Helper").unwrap();
    assert_eq!(helper.country, "");
    assert_eq!(helper.continent, "Unknown");
    assert_eq!(helper.orcid, "");
    assert_eq!(helper.openalex_id, "");
}

#[test]
fn test_top_lists_keep_five_entries() {
    let coauthors: Vec<Value> = (0..7)
        .map(|i| json!({"author": {"display_name": format!("Co {i}")}}))
        .collect();
    let mut authorships = vec![json!({"author": {"display_name": "Hub"}})];
    authorships.extend(coauthors);
    let works = parse_works(&json!([{"authorships": authorships}]).to_string()).unwrap();
    let profiles = aggregate(&works, &WorkFilters::new());

    let rows = rank(&profiles, &all_rows(SortKey::Count));
    let hub = rows.iter().find(|row| row.author == "Hub").unwrap();

    assert_eq!(hub.top_coauthors, "Co 0, Co 1, Co 2, Co 3, Co 4");
}

#[test]
fn test_empty_result_is_not_an_error() {
    let profiles = profiles_from(author_works("Lonely", &[1], None));

    let rows = rank(&profiles, &RankOptions::new().with_min_articles(5));

    assert!(rows.is_empty());
    assert_eq!(Summary::from_rows(&rows), Summary::default());
}

#[test]
fn test_summary_statistics() {
    let rows = vec![
        ResultRow {
            author: "A".into(),
            count: 4,
            median_citations: 2,
            average_citations: 3.0,
            country: String::new(),
            continent: "Unknown".into(),
            top_topics: String::new(),
            top_coauthors: String::new(),
            top_journals: String::new(),
            orcid: "https://orcid.org/1".into(),
            openalex_id: String::new(),
            score: 1,
        },
        ResultRow {
            author: "B".into(),
            count: 2,
            median_citations: 0,
            average_citations: 1.0,
            country: String::new(),
            continent: "Unknown".into(),
            top_topics: String::new(),
            top_coauthors: String::new(),
            top_journals: String::new(),
            orcid: String::new(),
            openalex_id: String::new(),
            score: 0,
        },
    ];

    let summary = Summary::from_rows(&rows);

    assert_eq!(summary.total_authors, 2);
    assert_eq!(summary.mean_publications, 3.0);
    assert_eq!(summary.mean_average_citations, 2.0);
    assert_eq!(summary.with_orcid, 1);
    assert_eq!(
        summary.to_string(),
        "Total authors: 2, avg publications: 3.0, avg citations: 2.0, with ORCID: 1"
    );
}

#[test]
fn test_row_serializes_with_column_names() {
    let profiles = profiles_from(author_works("Column Check", &[3], None));
    let rows = rank(&profiles, &all_rows(SortKey::Count));

    let value = serde_json::to_value(&rows[0]).unwrap();
    for header in ResultRow::HEADERS {
        assert!(value.get(header).is_some(), "missing column {header}");
    }
}
