//! Ready-made transform snippets a UI layer can offer as starting points.
//! Each is a complete expression over the sample document shape; users edit
//! the field names to fit their data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformPreset {
    pub label: &'static str,
    pub code: &'static str,
}

pub const TRANSFORM_PRESETS: &[TransformPreset] = &[
    TransformPreset {
        label: "Filter",
        code: r#"["filter", ["$", "$.users"], "u", [">", ["var", "u.age"], 25]]"#,
    },
    TransformPreset {
        label: "Map",
        code: r#"["map", ["$", "$.users"], "u", ["merge", ["var", "u"], ["obj", "name", ["upper", ["var", "u.name"]]]]]"#,
    },
    TransformPreset {
        label: "Pick keys",
        code: r#"["map", ["$", "$.users"], "u", ["pick", ["var", "u"], "name", "id"]]"#,
    },
    TransformPreset {
        label: "Omit keys",
        code: r#"["map", ["$", "$.users"], "u", ["omit", ["var", "u"], "age"]]"#,
    },
    TransformPreset {
        label: "Sort by",
        code: r#"["sortBy", ["$", "$.users"], "name"]"#,
    },
    TransformPreset {
        label: "Group by",
        code: r#"["groupBy", ["$", "$.users"], "role"]"#,
    },
    TransformPreset {
        label: "Unique by",
        code: r#"["uniqBy", ["$", "$.users"], "role"]"#,
    },
    TransformPreset {
        label: "Flatten",
        code: r#"["flatMap", ["$", "$.users"], "u", ["var", "u.tags"]]"#,
    },
    TransformPreset {
        label: "Count by",
        code: r#"["countBy", ["$", "$.users"], "role"]"#,
    },
    TransformPreset {
        label: "First N",
        code: r#"["take", ["$", "$.users"], 5]"#,
    },
    TransformPreset {
        label: "Pluck",
        code: r#"["pluck", ["$", "$.users"], "name"]"#,
    },
    TransformPreset {
        label: "Key by",
        code: r#"["keyBy", ["$", "$.users"], "id"]"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run_transform;
    use crate::sample::sample_document;

    #[test]
    fn every_preset_is_valid_json() {
        for preset in TRANSFORM_PRESETS {
            assert!(
                serde_json::from_str::<serde_json::Value>(preset.code).is_ok(),
                "preset {} is not valid JSON",
                preset.label
            );
        }
    }

    #[test]
    fn presets_run_against_the_sample_document() {
        let sample = sample_document();
        for preset in TRANSFORM_PRESETS {
            // "Flatten" assumes a tags field the sample lacks; it still runs,
            // producing an empty array.
            let outcome = run_transform(preset.code, &sample);
            assert_eq!(
                outcome.error, None,
                "preset {} failed: {:?}",
                preset.label, outcome.error
            );
            assert!(outcome.result.is_some(), "preset {} had no result", preset.label);
        }
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in TRANSFORM_PRESETS.iter().enumerate() {
            for b in &TRANSFORM_PRESETS[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
