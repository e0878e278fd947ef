use super::{PriceCatalog, PriceRecord};
use crate::model::municipality::MunicipalityCatalog;
use itertools::Itertools;
use serde_json::json;

/// one input to the priority merge: a tag naming the source and its
/// catalog. argument order on the command line is priority order.
#[derive(Debug, Clone)]
pub struct PriceSource {
    pub tag: String,
    pub catalog: PriceCatalog,
}

/// counts reported after a merge, for the run log.
#[derive(Debug, Clone)]
pub struct PriceMergeSummary {
    pub municipalities: usize,
    pub with_price: usize,
    /// (source tag, records available, records used as winner)
    pub sources: Vec<(String, usize, usize)>,
}

/// merges price sources in priority order, joined against the municipality
/// register.
///
/// per municipality, the first source with a usable price wins and its
/// record is kept whole; every later usable source contributes its price as
/// a `<tag>_chf_per_m2` secondary value on the winning record. records for
/// ids not in the register (including scraper bookkeeping keys) are
/// dropped by the join. a winner without its own `source` field is tagged
/// with the source tag.
pub fn merge_price_sources(
    municipalities: &MunicipalityCatalog,
    sources: &[PriceSource],
) -> (PriceCatalog, PriceMergeSummary) {
    let mut merged = PriceCatalog::default();
    let mut used = vec![0usize; sources.len()];

    for muni in municipalities.iter() {
        let usable = sources
            .iter()
            .enumerate()
            .filter_map(|(idx, source)| {
                source
                    .catalog
                    .get(&muni.id)
                    .filter(|record| record.usable())
                    .map(|record| (idx, record))
            })
            .collect_vec();
        let Some(((winner_idx, winner_record), losers)) = usable.split_first() else {
            continue;
        };

        let mut record: PriceRecord = (*winner_record).clone();
        if record.source.is_none() {
            record.source = Some(sources[*winner_idx].tag.clone());
        }
        for (loser_idx, loser_record) in losers.iter() {
            if let Some(value) = loser_record.chf_per_m2 {
                record.secondary.insert(
                    format!("{}_chf_per_m2", sources[*loser_idx].tag),
                    json!(value),
                );
            }
        }
        used[*winner_idx] += 1;
        merged.insert(muni.id.clone(), record);
    }

    let summary = PriceMergeSummary {
        municipalities: municipalities.len(),
        with_price: merged.len(),
        sources: sources
            .iter()
            .zip(used)
            .map(|(source, n)| (source.tag.clone(), source.catalog.available(), n))
            .collect_vec(),
    };
    (merged, summary)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::municipality::Municipality;
    use serde_json::json;

    fn register() -> MunicipalityCatalog {
        let records: Vec<Municipality> = serde_json::from_value(json!([
            {"id": "0261", "name": "Zürich", "canton": "Zürich", "canton_code": "ZH", "lat": 47.37, "lon": 8.54},
            {"id": "0351", "name": "Bern", "canton": "Bern", "canton_code": "BE", "lat": 46.95, "lon": 7.44},
            {"id": "1061", "name": "Luzern", "canton": "Luzern", "canton_code": "LU", "lat": 47.05, "lon": 8.31}
        ]))
        .expect("register fixture should deserialize");
        MunicipalityCatalog::new(records)
    }

    fn source(tag: &str, value: serde_json::Value) -> PriceSource {
        PriceSource {
            tag: String::from(tag),
            catalog: serde_json::from_value(value).expect("source fixture should deserialize"),
        }
    }

    #[test]
    fn test_first_usable_source_wins() {
        let sources = vec![
            source("neho", json!({"0261": {"chf_per_m2": 8000, "source": "neho"}})),
            source("homegate", json!({"0261": {"chf_per_m2": 7500}})),
        ];
        let (merged, summary) = merge_price_sources(&register(), &sources);
        let record = merged.get("0261").expect("merged record should be present");
        assert_eq!(record.chf_per_m2, Some(8000.0));
        assert_eq!(
            record.secondary.get("homegate_chf_per_m2"),
            Some(&json!(7500.0)),
            "losing source price should be retained as a secondary value"
        );
        assert_eq!(summary.sources[0].2, 1);
        assert_eq!(summary.sources[1].2, 0);
    }

    #[test]
    fn test_lower_priority_fills_gaps() {
        let sources = vec![
            source("neho", json!({"0261": {"chf_per_m2": 8000}})),
            source("homegate", json!({"0351": {"chf_per_m2": 6400}})),
        ];
        let (merged, summary) = merge_price_sources(&register(), &sources);
        let record = merged.get("0351").expect("gap should be filled");
        assert_eq!(record.chf_per_m2, Some(6400.0));
        assert_eq!(
            record.source.as_deref(),
            Some("homegate"),
            "bare winner records should be tagged with their source"
        );
        assert_eq!(summary.with_price, 2);
    }

    #[test]
    fn test_unusable_winner_is_skipped() {
        let sources = vec![
            source("neho", json!({"0261": {"chf_per_m2": 0}})),
            source("homegate", json!({"0261": {"chf_per_m2": 7500}})),
        ];
        let (merged, _) = merge_price_sources(&register(), &sources);
        let record = merged.get("0261").expect("merged record should be present");
        assert_eq!(
            record.chf_per_m2,
            Some(7500.0),
            "a zero price should not win the merge"
        );
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let sources = vec![source(
            "neho",
            json!({"_slug_zuerich": {"chf_per_m2": 8000}, "9999": {"chf_per_m2": 5000}}),
        )];
        let (merged, summary) = merge_price_sources(&register(), &sources);
        assert!(merged.is_empty());
        assert_eq!(summary.with_price, 0);
        assert_eq!(summary.municipalities, 3);
    }
}
