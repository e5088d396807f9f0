//! Fixture galleries shown by the demo page

/// A gallery as the host page would pass it to `ImageSelector`
pub struct DemoGallery {
    pub title: &'static str,
    pub images: Vec<String>,
    pub index: usize,
}

fn picsum(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/1600/900")
}

pub fn galleries() -> Vec<DemoGallery> {
    vec![
        DemoGallery {
            title: "Lunar survey",
            images: ["crater", "regolith", "earthrise", "lander", "rover"]
                .iter()
                .map(|seed| picsum(seed))
                .collect(),
            index: 0,
        },
        DemoGallery {
            title: "Orbital station",
            images: ["module", "dock", "solar-array"]
                .iter()
                .map(|seed| picsum(seed))
                .collect(),
            index: 2,
        },
        // Nothing supplied: the placeholder stands in
        DemoGallery {
            title: "Deep space probe",
            images: vec![],
            index: 0,
        },
        // Second image 404s and falls back to the placeholder
        DemoGallery {
            title: "Launch day",
            images: vec![
                picsum("launchpad"),
                "https://example.invalid/missing.jpg".to_string(),
                picsum("ignition"),
            ],
            index: 1,
        },
    ]
}
