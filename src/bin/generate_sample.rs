use serde_json::{json, Value};

/// Curated historical eruptions covering every field shape the loader
/// accepts: BCE years, undated eruptions, unset VEI, unrecorded death
/// tolls, tsunami markers, and both hemispheres.
fn sample_records() -> Vec<Value> {
    let rows: Vec<(&str, &str, &str, Option<i32>, f64, f64, Option<u8>, &str, Option<u32>)> = vec![
        ("Santorini", "Greece", "Caldera", Some(-1610), 36.404, 367.0, Some(7), "tsu", None),
        ("Vesuvius", "Italy", "Stratovolcano", Some(79), 40.821, 1281.0, Some(5), "tsu", Some(16000)),
        ("Taupo", "New Zealand", "Caldera", Some(232), -38.82, 760.0, Some(7), "", None),
        ("Ilopango", "El Salvador", "Caldera", None, 13.672, 450.0, Some(6), "", None),
        ("Laki", "Iceland", "Fissure vent", Some(1783), 64.42, 1725.0, Some(4), "", Some(9350)),
        ("Asama", "Japan", "Complex volcano", Some(1783), 36.4, 2560.0, Some(4), "", Some(1151)),
        ("Unzen", "Japan", "Complex volcano", Some(1792), 32.757, 1500.0, Some(2), "tsu", Some(14524)),
        ("Tambora", "Indonesia", "Stratovolcano", Some(1815), -8.25, 2850.0, Some(7), "tsu", Some(60000)),
        ("Krakatau", "Indonesia", "Caldera", Some(1883), -6.102, 813.0, Some(6), "tsu", Some(36417)),
        ("Pelee", "Martinique", "Stratovolcano", Some(1902), 14.82, 1397.0, Some(4), "tsu", Some(28000)),
        ("Novarupta", "United States", "Caldera", Some(1912), 58.27, 841.0, Some(6), "", None),
        ("Kilauea", "United States", "Shield volcano", Some(1924), 19.421, 1222.0, None, "", Some(1)),
        ("St. Helens", "United States", "Stratovolcano", Some(1980), 46.2, 2549.0, Some(5), "", Some(57)),
        ("Nevado del Ruiz", "Colombia", "Stratovolcano", Some(1985), 4.895, 5321.0, Some(3), "", Some(23000)),
        ("Cerro Hudson", "Chile", "Stratovolcano", Some(1991), -45.9, 1905.0, Some(5), "", None),
        ("Pinatubo", "Philippines", "Stratovolcano", Some(1991), 15.13, 1486.0, Some(6), "", Some(847)),
        ("Eyjafjallajokull", "Iceland", "Stratovolcano", Some(2010), 63.63, 1666.0, Some(4), "", None),
        ("Puyehue-Cordon Caulle", "Chile", "Stratovolcano", Some(2011), -40.59, 2236.0, Some(5), "", None),
    ];

    rows.into_iter()
        .map(
            |(name, country, volcano_type, year, latitude, elevation, vei, tsu, deaths)| {
                json!({
                    "Name": name,
                    "Country": country,
                    "Type": volcano_type,
                    "Year": year,
                    "Latitude": latitude,
                    "Elevation": elevation,
                    "VEI": vei,
                    "TSU": tsu,
                    "Deaths": deaths,
                })
            },
        )
        .collect()
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/volcano.json".to_string());

    let records = sample_records();
    let n_records = records.len();
    let text = serde_json::to_string_pretty(&Value::Array(records))
        .expect("Failed to serialize sample records");
    std::fs::write(&output_path, text).expect("Failed to write output file");

    println!("Wrote {n_records} eruption records to {output_path}");
}
