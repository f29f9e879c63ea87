use crate::{ErrorKind, Result};

/// A named example graph given as a list of labelled edges.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub edges: &'static [(&'static str, &'static str)],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "already-eulerian",
        description: "A directed triangle, nothing needs to be added",
        edges: &[("A", "B"), ("B", "C"), ("C", "A")],
    },
    Preset {
        name: "simple-imbalance",
        description: "A path that is closed into a cycle by one edge",
        edges: &[("A", "B"), ("B", "C"), ("C", "D")],
    },
    Preset {
        name: "disconnected-components",
        description: "Three disjoint edges that are chained into one cycle",
        edges: &[("A", "B"), ("C", "D"), ("E", "F")],
    },
    Preset {
        name: "star",
        description: "A center with edges to three leaves",
        edges: &[("Center", "A"), ("Center", "B"), ("Center", "C")],
    },
    Preset {
        name: "back-edges",
        description: "A triangle with an attached detour",
        edges: &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("D", "A")],
    },
];

/// Returns the preset with the given name.
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| ErrorKind::UnknownPreset(name.to_owned()).into())
}

#[cfg(test)]
mod tests {
    use super::{find_preset, PRESETS};
    use crate::ErrorKind;
    use eulerian_extension::algo::augmentation::make_eulerian;
    use eulerian_extension::algo::eulerian::is_eulerian;
    use eulerian_extension::io::graph_from_labelled_edges;
    use std::collections::HashSet;

    #[test]
    fn test_preset_names_are_unique() {
        let names: HashSet<_> = PRESETS.iter().map(|preset| preset.name).collect();
        assert_eq!(names.len(), PRESETS.len());
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("star").unwrap().edges.len(), 3);
        match find_preset("triangle").unwrap_err().kind() {
            ErrorKind::UnknownPreset(name) => assert_eq!(name, "triangle"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_presets_become_eulerian() {
        let expected_added_edges = [
            ("already-eulerian", 0),
            ("simple-imbalance", 1),
            ("disconnected-components", 3),
            ("star", 3),
            ("back-edges", 1),
        ];

        for (name, expected) in expected_added_edges {
            let preset = find_preset(name).unwrap();
            let mut graph = graph_from_labelled_edges(preset.edges.iter().copied());
            let added_edges = make_eulerian(&mut graph).unwrap();
            assert_eq!(added_edges.len(), expected, "preset {}", name);
            assert!(is_eulerian(&graph), "preset {}", name);
        }
    }
}
