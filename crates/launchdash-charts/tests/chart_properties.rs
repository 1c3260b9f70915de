//! Chart invariants over arbitrary launch tables.

use launchdash_charts::{payload_scatter, success_pie};
use launchdash_common::{PayloadRange, SiteSelection};
use launchdash_data::{LaunchRecord, LaunchTable, OutcomeClass};
use proptest::prelude::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
    (0..SITES.len(), 0.0f64..10_000.0, any::<bool>(), 0..BOOSTERS.len()).prop_map(
        |(site, payload, success, booster)| {
            let class = if success { OutcomeClass::Success } else { OutcomeClass::Failure };
            LaunchRecord::new(SITES[site], payload, class, BOOSTERS[booster])
        },
    )
}

fn table_strategy() -> impl Strategy<Value = LaunchTable> {
    prop::collection::vec(record_strategy(), 1..60)
        .prop_map(|records| LaunchTable::from_records(records).unwrap())
}

fn range_strategy() -> impl Strategy<Value = PayloadRange> {
    (0.0f64..10_000.0, 0.0f64..10_000.0)
        .prop_map(|(a, b)| PayloadRange::new(a.min(b), a.max(b)).unwrap())
}

fn site_strategy() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        (0..SITES.len()).prop_map(|i| SiteSelection::site(SITES[i])),
    ]
}

proptest! {
    #[test]
    fn scatter_points_lie_in_range(
        table in table_strategy(),
        site in site_strategy(),
        range in range_strategy(),
    ) {
        let chart = payload_scatter(&table, &site, range);
        for point in &chart.points {
            prop_assert!(range.contains(point.x));
            prop_assert!(site.matches(&point.launch_site));
        }
    }

    #[test]
    fn scatter_keeps_every_matching_row(
        table in table_strategy(),
        site in site_strategy(),
        range in range_strategy(),
    ) {
        let expected = table
            .records()
            .iter()
            .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
            .count();
        prop_assert_eq!(payload_scatter(&table, &site, range).points.len(), expected);
    }

    #[test]
    fn pie_all_sums_to_total_successes(table in table_strategy()) {
        let chart = success_pie(&table, &SiteSelection::All);
        prop_assert_eq!(chart.total(), table.success_count() as u64);
        prop_assert_eq!(chart.slices.len(), table.sites().len());
    }

    #[test]
    fn pie_site_sums_to_site_rows(table in table_strategy(), i in 0..SITES.len()) {
        let site = SITES[i];
        let chart = success_pie(&table, &SiteSelection::site(site));
        prop_assert_eq!(chart.total(), table.at_site(site).count() as u64);
        prop_assert!(chart.slices.len() <= 2);
    }

    #[test]
    fn scatter_is_idempotent(
        table in table_strategy(),
        site in site_strategy(),
        range in range_strategy(),
    ) {
        prop_assert_eq!(
            payload_scatter(&table, &site, range),
            payload_scatter(&table, &site, range)
        );
    }

    #[test]
    fn full_range_returns_all_rows(table in table_strategy()) {
        let chart = payload_scatter(&table, &SiteSelection::All, table.full_range().unwrap());
        prop_assert_eq!(chart.points.len(), table.len());
    }
}

/// rows (A, 500, 1), (A, 1500, 0), (B, 3000, 1)
fn worked_example() -> LaunchTable {
    LaunchTable::from_records(vec![
        LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
        LaunchRecord::new("A", 1500.0, OutcomeClass::Failure, "v1.0"),
        LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "FT"),
    ])
    .unwrap()
}

#[test]
fn test_worked_example_pies() {
    let table = worked_example();

    let all = success_pie(&table, &SiteSelection::All);
    assert_eq!(all.value_of("A"), Some(1));
    assert_eq!(all.value_of("B"), Some(1));
    assert_eq!(all.slices.len(), 2);

    let site_a = success_pie(&table, &SiteSelection::site("A"));
    assert_eq!(site_a.value_of("0"), Some(1));
    assert_eq!(site_a.value_of("1"), Some(1));
}

#[test]
fn test_worked_example_scatters() {
    let table = worked_example();
    let range = PayloadRange::new(0.0, 2000.0).unwrap();
    let first_two = &table.records()[..2];

    for site in [SiteSelection::All, SiteSelection::site("A")] {
        let chart = payload_scatter(&table, &site, range);
        let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
        let expected: Vec<f64> = first_two.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(xs, expected, "site {}", site);
    }
}
