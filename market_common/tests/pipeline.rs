//! End-to-end aggregation over a realistic ISS stocks document: decode,
//! seed, merge both result sets, derive metrics, rank.
use market_common::instrument::UNQUOTED;
use market_common::iss::{DatasetRole, IssDocument};
use market_common::mapper;
use market_common::rank::{SortMetric, rank};
use market_common::set::InstrumentSet;

const STOCKS_XML: &str = r#"
<document>
    <data id="marketdata">
        <rows>
            <row SECID="SBER" LAST="255.0" VALTODAY="1000000.5"/>
            <row SECID="PHOR" LAST="6500.0" VALTODAY="250000"/>
            <row SECID="LKOH" LAST="7200.0" VALTODAY="90000"/>
        </rows>
    </data>
    <data id="securities">
        <rows>
            <row SECID="SBER" PREVPRICE="250.0"/>
            <row SECID="PHOR" PREVPRICE="6550.0"/>
            <row SECID="LKOH" PREVPRICE="7100.0"/>
        </rows>
    </data>
</document>"#;

#[test]
fn full_cycle_produces_ranked_finalized_records() {
    let document = IssDocument::parse(STOCKS_XML).unwrap();
    let mut set = InstrumentSet::seed(["SBER", "PHOR", "BELU"]);

    mapper::populate(&mut set, document.dataset(1).unwrap(), DatasetRole::Securities).unwrap();
    mapper::populate(&mut set, document.dataset(0).unwrap(), DatasetRole::MarketData).unwrap();

    let sber = set.get("SBER").unwrap();
    assert_eq!(sber.price, 255.0);
    assert_eq!(sber.prev_price, 250.0);
    assert_eq!(sber.price_change(), 5.0);
    assert_eq!(sber.price_change_percent(), 2.0);
    assert_eq!(sber.formatted_volume(), "1 000 000");

    // BELU was requested but never quoted: sentinels survive the merge.
    let belu = set.get("BELU").unwrap();
    assert_eq!(belu.price, UNQUOTED);
    assert_eq!(belu.prev_price, UNQUOTED);
    assert_eq!(belu.price_change(), 0.0);

    // LKOH was quoted but never requested: it must not appear at all.
    assert!(set.get("LKOH").is_none());

    let ranked = rank(set.into_ordered(), SortMetric::Change);
    let tickers: Vec<&str> = ranked.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, ["PHOR", "BELU", "SBER"]);
}

#[test]
fn swapped_result_sets_fail_fast() {
    let document = IssDocument::parse(STOCKS_XML).unwrap();
    let mut set = InstrumentSet::seed(["SBER"]);

    // Indexing mistake: handing the marketdata set to the securities pass.
    let result = mapper::populate(
        &mut set,
        document.dataset(0).unwrap(),
        DatasetRole::Securities,
    );
    assert!(result.is_err());

    // The failed pass must not have touched the seeded record.
    let sber = set.get("SBER").unwrap();
    assert_eq!(sber.price, UNQUOTED);
    assert_eq!(sber.prev_price, UNQUOTED);
}
