//! The built-in Mumbai suburban rail and metro network.
//!
//! Used when no network file is configured. Where a railway junction is a
//! single physical station shared by several lines (Dadar, Kurla, Thane...)
//! the lines simply share the station node. Separate stations that form one
//! interchange (Borivali / Borivali Metro) are joined by junction edges.

use crate::domain::Mode;

use super::definition::{JunctionDefinition, LineDefinition, NetworkDefinition};

/// Local trains: ₹5 and 3 minutes per station, comfort 5.
const LOCAL_FARE: u32 = 5;
const LOCAL_COMFORT: u8 = 5;

/// Metro: ₹20 and 2 minutes per station, comfort 10 (air-conditioned).
const METRO_TIME: u32 = 2;
const METRO_FARE: u32 = 20;
const METRO_COMFORT: u8 = 10;

const WESTERN: &[&str] = &[
    "Churchgate", "Marine Lines", "Charni Road", "Grant Road", "Mumbai Central",
    "Mahalakshmi", "Lower Parel", "Prabhadevi", "Dadar", "Matunga Road",
    "Mahim Junction", "Bandra", "Khar Road", "Santacruz", "Vile Parle",
    "Andheri", "Jogeshwari", "Ram Mandir", "Goregaon", "Malad",
    "Kandivali", "Borivali", "Dahisar", "Mira Road", "Bhayander",
    "Naigaon", "Vasai Road", "Nalla Sopara", "Virar",
];

const CENTRAL_MAIN: &[&str] = &[
    "CSMT", "Masjid", "Sandhurst Road", "Byculla", "Chinchpokli",
    "Currey Road", "Parel", "Dadar", "Matunga", "Sion",
    "Kurla", "Vidyavihar", "Ghatkopar", "Vikhroli", "Kanjur Marg",
    "Bhandup", "Nahur", "Mulund", "Thane", "Kalva",
    "Mumbra", "Diva Junction", "Kopar", "Dombivli", "Thakurli", "Kalyan",
];

const CENTRAL_KASARA: &[&str] = &[
    "Kalyan", "Shahad", "Ambivli", "Titwala", "Khadavli",
    "Vasind", "Asangaon", "Atgaon", "Thansit", "Khardi",
    "Umbermali", "Kasara",
];

const CENTRAL_KARJAT: &[&str] = &[
    "Kalyan", "Vithalwadi", "Ulhasnagar", "Ambarnath", "Badlapur",
    "Vangani", "Shelu", "Neral", "Bhivpuri Road", "Karjat",
];

const HARBOUR: &[&str] = &[
    "CSMT", "Masjid", "Sandhurst Road", "Dockyard Road", "Reay Road",
    "Cotton Green", "Sewri", "Vadala Road", "GTB Nagar", "Chunabhatti",
    "Kurla", "Tilak Nagar", "Chembur", "Govandi", "Mankhurd",
    "Vashi", "Sanpada", "Juinagar", "Nerul", "Seawood Darave",
    "Belapur CBD", "Kharghar", "Mansarovar", "Khandeshwar", "Panvel",
];

const TRANS_HARBOUR: &[&str] = &[
    "Thane", "Airoli", "Rabale", "Ghansoli", "Koparkhairane",
    "Turbhe", "Juinagar", "Nerul", "Seawood Darave", "Belapur CBD",
    "Kharghar", "Mansarovar", "Khandeshwar", "Panvel",
];

const METRO_1: &[&str] = &[
    "Versova", "D.N. Nagar", "Azad Nagar", "Andheri", "Western Express Highway",
    "Chakala", "Airport Road", "Marol Naka", "Saki Naka", "Jagruti Nagar",
    "Asalpha", "Ghatkopar",
];

// Metro 2A stations that sit beside a Western Line station carry a "Metro"
// suffix so the two are distinct nodes.
const METRO_2A: &[&str] = &[
    "Dahisar East", "Anand Nagar", "Dahisar West", "Ovaripada", "Magathane",
    "Devipada", "Kandivali Metro", "Poisar", "Mandapeshwar", "Borivali Metro",
    "Eksar", "Goregaon Metro", "Malad Metro", "Kurar Village", "Aarey",
    "JVLR", "Jogeshwari Metro", "Vile Parle Metro", "D.N. Nagar",
];

const METRO_7: &[&str] = &[
    "Dahisar East", "Mahavir Nagar", "Pushpa Park", "Akurli Road",
    "MTNL", "Andheri East",
];

/// The Mumbai network definition.
pub fn mumbai_network() -> NetworkDefinition {
    let local = |name: &str, stations: &[&str], time: u32| {
        LineDefinition::new(name, Mode::LocalTrain, stations, time, LOCAL_FARE, LOCAL_COMFORT)
    };
    let metro = |name: &str, stations: &[&str]| {
        LineDefinition::new(name, Mode::Metro, stations, METRO_TIME, METRO_FARE, METRO_COMFORT)
    };

    let lines = vec![
        local("Western Line", WESTERN, 3),
        local("Central Line", CENTRAL_MAIN, 3),
        local("Central Line (Kasara)", CENTRAL_KASARA, 4),
        local("Central Line (Karjat)", CENTRAL_KARJAT, 4),
        local("Harbour Line", HARBOUR, 3),
        local("Trans-Harbour Line", TRANS_HARBOUR, 3),
        metro("Metro Line 1", METRO_1),
        metro("Metro Line 2A", METRO_2A),
        metro("Metro Line 7", METRO_7),
    ];

    let junctions = vec![
        // Metro 2A beside the Western Line
        JunctionDefinition::new("Borivali", "Borivali Metro", 10, 4, "Western-Metro2A Interchange"),
        JunctionDefinition::new("Goregaon", "Goregaon Metro", 10, 4, "Western-Metro2A Interchange"),
        JunctionDefinition::new("Jogeshwari", "Jogeshwari Metro", 10, 4, "Western-Metro2A Interchange"),
        JunctionDefinition::new("Vile Parle", "Vile Parle Metro", 10, 4, "Western-Metro2A Interchange"),
        JunctionDefinition::new("Kandivali", "Kandivali Metro", 10, 4, "Western-Metro2A Interchange"),
        JunctionDefinition::new("Malad", "Malad Metro", 10, 4, "Western-Metro2A Interchange"),
        // Metro 7 terminus
        JunctionDefinition::new("Andheri", "Andheri East", 15, 4, "Andheri-AndheriEast Interchange"),
    ];

    NetworkDefinition { lines, junctions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_errors() {
        let g = mumbai_network().build().unwrap();
        assert_eq!(g.station_count(), 133);
        assert_eq!(g.connection_count(), 142);
        assert!(g.contains("Andheri"));
        assert!(g.contains("Ghatkopar"));
        assert!(g.contains("Borivali Metro"));
    }

    #[test]
    fn shared_stations_are_single_nodes() {
        let g = mumbai_network().build().unwrap();
        let dadar = g.station_id("Dadar").unwrap();
        let lines: std::collections::HashSet<_> = g
            .neighbors(dadar)
            .map(|(_, c)| c.line.as_str().to_string())
            .collect();
        assert!(lines.contains("Western Line"));
        assert!(lines.contains("Central Line"));
    }

    #[test]
    fn metro_edges_are_metro() {
        let g = mumbai_network().build().unwrap();
        let andheri = g.station_id("Andheri").unwrap();
        let weh = g.station_id("Western Express Highway").unwrap();
        let c = g.connection(andheri, weh).unwrap();
        assert!(c.is_metro());
        assert_eq!(c.time, 2);
        assert_eq!(c.cost, 20);
        assert_eq!(c.comfort, 10);
    }

    #[test]
    fn whole_network_is_connected() {
        let g = mumbai_network().build().unwrap();
        let churchgate = g.station_id("Churchgate").unwrap();
        for (id, station) in g.stations() {
            assert!(g.has_path(churchgate, id), "{} unreachable", station);
        }
    }

    #[test]
    fn shared_harbour_track_takes_trans_harbour_attributes() {
        let g = mumbai_network().build().unwrap();
        let c = g
            .connection(g.station_id("Juinagar").unwrap(), g.station_id("Nerul").unwrap())
            .unwrap();
        assert_eq!(c.line.as_str(), "Trans-Harbour Line");
    }
}
