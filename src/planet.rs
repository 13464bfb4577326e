// src/planet.rs

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlanetRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    // relative to the site root, e.g. /images/earth.png
    pub image: String,
    // display text, not parsed
    pub velocity: String,
    pub distance: String,
}

impl PlanetRecord {
    fn new(id: i32, name: &str, description: &str, velocity: &str, distance: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image: format!("/images/{}.png", name.to_lowercase()),
            velocity: velocity.to_string(),
            distance: distance.to_string(),
        }
    }
}

/// The eight major planets, ordered by distance from the Sun. `id` is the upsert key.
pub fn planets() -> Vec<PlanetRecord> {
    vec![
        PlanetRecord::new(
            1,
            "Mercury",
            "The smallest planet and closest to the Sun, Mercury has a rocky surface and extreme temperature variations.",
            "47.87 km/s",
            "57.9 million km",
        ),
        PlanetRecord::new(
            2,
            "Venus",
            "Venus has a thick, toxic atmosphere and is the hottest planet in the Solar System due to a strong greenhouse effect.",
            "35.02 km/s",
            "108.2 million km",
        ),
        PlanetRecord::new(
            3,
            "Earth",
            "Our home planet, Earth is the only known world to support life and has a surface mostly covered by water.",
            "29.78 km/s",
            "149.6 million km",
        ),
        PlanetRecord::new(
            4,
            "Mars",
            "Mars is a cold, desert world with the largest volcano in the Solar System and evidence of past water flows.",
            "24.07 km/s",
            "227.9 million km",
        ),
        PlanetRecord::new(
            5,
            "Jupiter",
            "The largest planet, Jupiter is a gas giant with a strong magnetic field and dozens of moons.",
            "13.07 km/s",
            "778.3 million km",
        ),
        PlanetRecord::new(
            6,
            "Saturn",
            "Saturn is famous for its extensive ring system made of ice and rock; it is a gas giant like Jupiter.",
            "9.69 km/s",
            "1.43 billion km",
        ),
        PlanetRecord::new(
            7,
            "Uranus",
            "An ice giant with a tilted rotation axis, Uranus appears blue-green due to methane in its atmosphere.",
            "6.81 km/s",
            "2.87 billion km",
        ),
        PlanetRecord::new(
            8,
            "Neptune",
            "Neptune is a distant ice giant known for strong winds and a deep blue color caused by methane.",
            "5.43 km/s",
            "4.5 billion km",
        ),
    ]
}
