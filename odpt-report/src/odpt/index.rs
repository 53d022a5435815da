//! Lookup-table construction over fetched records.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use tracing::debug;

use super::client::OdptClient;
use super::error::OdptError;
use super::id::StationId;
use super::types::{Resource, Station};

/// Index records by their unique identifier.
///
/// Identifiers are expected to be unique across a response. When a
/// duplicate occurs, the last record wins and earlier ones are dropped.
pub fn index_by_id<R: Resource>(records: Vec<R>) -> HashMap<R::Id, R> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.insert(record.id().clone(), record);
    }
    index
}

/// Bucket indexed records by a derived key.
///
/// Records for which `key` returns `None` are collected under the `None`
/// bucket rather than dropped. The outer map is ordered so reports iterate
/// buckets deterministically.
pub fn group_by<R, K, F>(
    records: &HashMap<R::Id, R>,
    key: F,
) -> BTreeMap<Option<K>, HashMap<R::Id, &R>>
where
    R: Resource,
    K: Ord,
    F: Fn(&R) -> Option<K>,
{
    let mut groups: BTreeMap<Option<K>, HashMap<R::Id, &R>> = BTreeMap::new();
    for (id, record) in records {
        groups
            .entry(key(record))
            .or_default()
            .insert(id.clone(), record);
    }
    groups
}

/// Look up a station, widening the query to its railway on a miss.
///
/// On a cache miss the owning railway is derived from the station
/// identifier, that railway's stations are fetched and merged into the
/// caller-owned cache in place, and the lookup is retried once. `Ok(None)`
/// means the station is still unknown after widening; stations whose
/// identifier does not name a railway take the same path without a fetch.
pub async fn resolve_station<'a>(
    client: &OdptClient,
    station_id: &StationId,
    cache: &'a mut HashMap<StationId, Station>,
) -> Result<Option<&'a Station>, OdptError> {
    if !cache.contains_key(station_id) {
        if let Some(railway) = station_id.railway() {
            debug!(station = %station_id, railway = %railway, "station cache miss, fetching railway stations");
            let fetched = client
                .fetch_where::<Station>(&[("odpt:railway", railway.as_str())])
                .await?;
            cache.extend(fetched);
        }
    }

    Ok(cache.get(station_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odpt::client::OdptConfig;
    use crate::odpt::id::RailwayId;

    fn station(id: &str, title: &str, railway: &str) -> Station {
        Station {
            same_as: StationId::new(id),
            title: title.to_string(),
            railway: RailwayId::new(railway),
        }
    }

    #[test]
    fn index_by_id_keys_records() {
        let index = index_by_id(vec![
            station("odpt.Station:A.X.One", "一", "odpt.Railway:A.X"),
            station("odpt.Station:A.X.Two", "二", "odpt.Railway:A.X"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get(&StationId::new("odpt.Station:A.X.One")).map(|s| s.title.as_str()),
            Some("一")
        );
    }

    #[test]
    fn index_by_id_last_duplicate_wins() {
        let index = index_by_id(vec![
            station("odpt.Station:A.X.One", "first", "odpt.Railway:A.X"),
            station("odpt.Station:A.X.One", "second", "odpt.Railway:A.X"),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(&StationId::new("odpt.Station:A.X.One")).map(|s| s.title.as_str()),
            Some("second")
        );
    }

    #[test]
    fn group_by_buckets_records() {
        let index = index_by_id(vec![
            station("odpt.Station:A.X.One", "一", "odpt.Railway:A.X"),
            station("odpt.Station:A.X.Two", "二", "odpt.Railway:A.X"),
            station("odpt.Station:A.Y.One", "壱", "odpt.Railway:A.Y"),
        ]);

        let groups = group_by(&index, |s| Some(s.railway.clone()));

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups
                .get(&Some(RailwayId::new("odpt.Railway:A.X")))
                .map(HashMap::len),
            Some(2)
        );
    }

    #[test]
    fn group_by_collects_missing_keys_under_none() {
        let index = index_by_id(vec![
            station("odpt.Station:A.X.One", "一", "odpt.Railway:A.X"),
            station("odpt.Station:A.Y.One", "壱", "odpt.Railway:A.Y"),
        ]);

        // Bucket by a key only some records carry.
        let groups = group_by(&index, |s| {
            (s.railway == RailwayId::new("odpt.Railway:A.X")).then(|| s.railway.clone())
        });

        assert_eq!(groups.get(&None).map(HashMap::len), Some(1));
    }

    fn offline_client() -> OdptClient {
        // Unroutable base URL: any actual fetch in these tests is a bug.
        OdptClient::new(OdptConfig::new("test-key").with_base_url("http://127.0.0.1:1")).unwrap()
    }

    #[tokio::test]
    async fn resolve_station_cache_hit_does_not_fetch() {
        let client = offline_client();
        let mut cache = index_by_id(vec![station(
            "odpt.Station:A.X.One",
            "一",
            "odpt.Railway:A.X",
        )]);

        let found = resolve_station(&client, &StationId::new("odpt.Station:A.X.One"), &mut cache)
            .await
            .unwrap();

        assert_eq!(found.map(|s| s.title.as_str()), Some("一"));
    }

    #[tokio::test]
    async fn resolve_station_unparseable_id_is_not_found() {
        let client = offline_client();
        let mut cache = HashMap::new();

        // No railway can be derived, so no widening fetch happens either.
        let found = resolve_station(&client, &StationId::new("garbage"), &mut cache)
            .await
            .unwrap();

        assert!(found.is_none());
        assert!(cache.is_empty());
    }
}
