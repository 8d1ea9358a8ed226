use tokio::sync::RwLock;

use crate::types::airport::{self, Airport, AirportV1, AirportV2};

/// In-memory airport records, populated at startup and never grown or
/// shrunk. Only `image_url` changes, and only through [`set_image_url`].
///
/// [`set_image_url`]: AirportRegistry::set_image_url
#[derive(Debug)]
pub struct AirportRegistry {
    airports: RwLock<Vec<Airport>>,
}

impl Default for AirportRegistry {
    fn default() -> Self {
        Self::new(airport::seed())
    }
}

impl AirportRegistry {
    #[must_use]
    pub fn new(airports: Vec<Airport>) -> Self {
        Self {
            airports: RwLock::new(airports),
        }
    }

    pub async fn list_v1(&self) -> Vec<AirportV1> {
        self.airports.read().await.iter().map(AirportV1::from).collect()
    }

    pub async fn list_v2(&self) -> Vec<AirportV2> {
        self.airports.read().await.iter().map(AirportV2::from).collect()
    }

    /// First airport whose name is exactly `name`.
    pub async fn find_by_name(&self, name: &str) -> Option<Airport> {
        self.airports
            .read()
            .await
            .iter()
            .find(|airport| airport.name == name)
            .cloned()
    }

    /// Points the first airport named `name` at `image_url` and returns the
    /// updated record, or `None` if no airport has that name.
    pub async fn set_image_url(
        &self,
        name: &str,
        image_url: String,
    ) -> Option<Airport> {
        let mut airports = self.airports.write().await;
        let airport = airports.iter_mut().find(|airport| airport.name == name)?;
        airport.image_url = image_url;
        Some(airport.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const OSMANI: &str = "Osmani International Airport";

    #[tokio::test]
    async fn lists_preserve_seed_order() {
        let registry = AirportRegistry::default();
        let v1 = registry.list_v1().await;
        let v2 = registry.list_v2().await;
        let codes: Vec<_> = v1.iter().map(|a| a.iata.as_str()).collect();
        assert_eq!(codes, ["DAC", "CGP", "ZYL"]);
        assert_eq!(v1.len(), v2.len());
        for (a, b) in v1.iter().zip(&v2) {
            assert_eq!(
                (&a.name, &a.city, &a.iata, &a.image_url),
                (&b.name, &b.city, &b.iata, &b.image_url)
            );
        }
    }

    #[tokio::test]
    async fn lookup_is_exact_and_case_sensitive() {
        let registry = AirportRegistry::default();
        assert_eq!(registry.find_by_name(OSMANI).await.unwrap().iata, "ZYL");
        assert!(
            registry
                .find_by_name("osmani international airport")
                .await
                .is_none()
        );
        assert!(registry.find_by_name("Osmani").await.is_none());
        assert!(registry.find_by_name("").await.is_none());
    }

    #[tokio::test]
    async fn first_match_wins() {
        let registry = AirportRegistry::new(vec![
            Airport::new("Twin", "A", "AAA", "a", 1),
            Airport::new("Twin", "B", "BBB", "b", 2),
        ]);
        assert_eq!(registry.find_by_name("Twin").await.unwrap().iata, "AAA");
        let updated = registry.set_image_url("Twin", "new".into()).await;
        assert_eq!(updated.unwrap().iata, "AAA");
        let v1 = registry.list_v1().await;
        assert_eq!(v1[0].image_url, "new");
        assert_eq!(v1[1].image_url, "b");
    }

    #[tokio::test]
    async fn image_update_is_visible_in_both_views() {
        let registry = AirportRegistry::default();
        let url = "https://cdn.test/bucket/zyl.png".to_string();
        let updated = registry.set_image_url(OSMANI, url.clone()).await;
        assert_eq!(updated.unwrap().image_url, url);

        let v1 = registry.list_v1().await;
        let v2 = registry.list_v2().await;
        assert_eq!(v1[2].image_url, url);
        assert_eq!(v2[2].image_url, url);
        assert_eq!(v2[2].runway_length, 2500);
        // other airports untouched
        assert_eq!(v1[0], AirportV1::from(&airport::seed()[0]));
        assert_eq!(v2[1], AirportV2::from(&airport::seed()[1]));
    }

    #[tokio::test]
    async fn unknown_name_changes_nothing() {
        let registry = AirportRegistry::default();
        let before = registry.list_v2().await;
        assert!(
            registry
                .set_image_url("Nowhere International", "x".into())
                .await
                .is_none()
        );
        assert_eq!(registry.list_v2().await, before);
    }
}
