use serde::{Deserialize, Serialize};

/// The canonical airport record. Both API versions are projections of it,
/// so an image update is a single write seen by every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    pub city: String,
    /// 3-letter IATA code, e.g. `ZYL`.
    pub iata: String,
    pub image_url: String,
    /// In meters.
    pub runway_length: u32,
}

impl Airport {
    #[must_use]
    pub fn new(
        name: &str,
        city: &str,
        iata: &str,
        image_url: &str,
        runway_length: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            iata: iata.to_string(),
            image_url: image_url.to_string(),
            runway_length,
        }
    }

    /// Storage object name for an image uploaded as `file_name`: the
    /// lower-cased IATA code followed by the file's extension, if any.
    ///
    /// The extension is everything from the last `.` of the final path
    /// component, so `photo.jpg` for `ZYL` becomes `zyl.jpg`, `.jpg` becomes
    /// `zyl.jpg` and `photo` becomes `zyl`.
    #[must_use]
    pub fn object_name(&self, file_name: &str) -> String {
        let code = self.iata.to_lowercase();
        // clients such as old browsers may send a full path
        let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();
        match base.rfind('.') {
            Some(dot) => format!("{code}{}", &base[dot..]),
            None => code,
        }
    }
}

/// `GET /airports` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirportV1 {
    pub name: String,
    pub city: String,
    pub iata: String,
    pub image_url: String,
}

/// `GET /airports_v2` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirportV2 {
    pub name: String,
    pub city: String,
    pub iata: String,
    pub image_url: String,
    pub runway_length: u32,
}

impl From<&Airport> for AirportV1 {
    fn from(airport: &Airport) -> Self {
        Self {
            name: airport.name.clone(),
            city: airport.city.clone(),
            iata: airport.iata.clone(),
            image_url: airport.image_url.clone(),
        }
    }
}

impl From<&Airport> for AirportV2 {
    fn from(airport: &Airport) -> Self {
        Self {
            name: airport.name.clone(),
            city: airport.city.clone(),
            iata: airport.iata.clone(),
            image_url: airport.image_url.clone(),
            runway_length: airport.runway_length,
        }
    }
}

/// The airports the service starts with.
#[must_use]
pub fn seed() -> Vec<Airport> {
    vec![
        Airport::new(
            "Hazrat Shahjalal International Airport",
            "Dhaka",
            "DAC",
            "https://storage.googleapis.com/bd-airport-data/dac.jpg",
            3200,
        ),
        Airport::new(
            "Shah Amanat International Airport",
            "Chittagong",
            "CGP",
            "https://storage.googleapis.com/bd-airport-data/cgp.jpg",
            2900,
        ),
        Airport::new(
            "Osmani International Airport",
            "Sylhet",
            "ZYL",
            "https://storage.googleapis.com/bd-airport-data/zyl.jpg",
            2500,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osmani() -> Airport {
        seed().remove(2)
    }

    #[test]
    fn object_name_uses_lowercase_code_and_extension() {
        let airport = osmani();
        assert_eq!(airport.object_name("photo.jpg"), "zyl.jpg");
        assert_eq!(airport.object_name("photo.final.webp"), "zyl.webp");
        assert_eq!(airport.object_name("PHOTO.PNG"), "zyl.PNG");
    }

    #[test]
    fn object_name_without_extension() {
        let airport = osmani();
        assert_eq!(airport.object_name("photo"), "zyl");
        assert_eq!(airport.object_name(""), "zyl");
    }

    #[test]
    fn object_name_dotfile_is_all_extension() {
        let airport = osmani();
        assert_eq!(airport.object_name(".jpg"), "zyl.jpg");
        assert_eq!(airport.object_name("photo."), "zyl.");
        assert_eq!(airport.object_name("album.d/.png"), "zyl.png");
    }

    #[test]
    fn object_name_ignores_client_directories() {
        let airport = osmani();
        assert_eq!(airport.object_name("shots.d/photo"), "zyl");
        assert_eq!(airport.object_name("C:\\Users\\me\\tarmac.jpeg"), "zyl.jpeg");
    }

    #[test]
    fn v1_drops_runway_length() {
        let airport = osmani();
        let value = serde_json::to_value(AirportV1::from(&airport)).unwrap();
        assert!(value.get("runway_length").is_none());
        assert_eq!(value["iata"], "ZYL");

        let value = serde_json::to_value(AirportV2::from(&airport)).unwrap();
        assert_eq!(value["runway_length"], 2500);
    }

    #[test]
    fn seed_names_are_unique() {
        let airports = seed();
        for (i, airport) in airports.iter().enumerate() {
            assert!(
                airports[i + 1..].iter().all(|a| a.name != airport.name),
                "duplicate name {}",
                airport.name
            );
        }
    }
}
