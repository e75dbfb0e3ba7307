use rand::Rng;
use rand::distributions::Alphanumeric;
use wxnode::network::application::http::{Error, Url};

fn random_word(rng: &mut impl Rng, max: usize) -> String {
    let len = rng.gen_range(1..=max);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[test]
fn test_documented_examples() {
    let url = Url::parse("http://example.com/data").unwrap();
    assert_eq!(url.host(), "example.com");
    assert_eq!(url.port(), 80);
    assert_eq!(url.path(), "/data");

    let url = Url::parse("http://10.0.0.1:9000/").unwrap();
    assert_eq!(url.host(), "10.0.0.1");
    assert_eq!(url.port(), 9000);
    assert_eq!(url.path(), "/");
}

#[test]
fn test_random_urls_round_trip() {
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let labels = rng.gen_range(1..=3);
        let host = (0..labels)
            .map(|_| random_word(&mut rng, 12))
            .collect::<Vec<_>>()
            .join(".");
        let port: Option<u16> = rng.gen_bool(0.5).then(|| rng.r#gen());
        let segments = (0..rng.gen_range(0..=4))
            .map(|_| random_word(&mut rng, 8))
            .collect::<Vec<_>>();

        let mut url = format!("http://{host}");
        if let Some(port) = port {
            url.push_str(&format!(":{port}"));
        }
        let path: String = segments.iter().map(|s| format!("/{s}")).collect();
        url.push_str(&path);

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.host(), host, "{url}");
        assert_eq!(parsed.port(), port.unwrap_or(80), "{url}");
        let expected_path = if path.is_empty() { "/" } else { path.as_str() };
        assert_eq!(parsed.path(), expected_path, "{url}");
    }
}

#[test]
fn test_unsupported_scheme() {
    let urls = [
        "https://example.com/",
        "mqtt://broker:1883",
        "//example.com/",
        "",
    ];
    for url in urls {
        assert_eq!(Url::parse(url), Err(Error::InvalidUrl), "{url}");
    }
}

#[test]
fn test_try_from_and_display() {
    let url = Url::try_from("http://station.local/readings").unwrap();
    assert_eq!(url.to_string(), "http://station.local:80/readings");
}
