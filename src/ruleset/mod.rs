//! This module defines the [`Ruleset`] struct and its associated methods.
//! It loads the placement rules of districts and improvements from *JSON* files with comments.

use std::collections::HashMap;

use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::tile_component::{District, Improvement};

mod district_rule;
mod improvement_rule;

pub use district_rule::*;
pub use improvement_rule::*;

const DISTRICT_RULES_FILE: &str = "DistrictPlacementRules.json";
const IMPROVEMENT_RULES_FILE: &str = "ImprovementPlacementRules.json";

#[derive(Debug, Error)]
pub enum RulesetError {
    #[error("can't parse {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("district `{district}` refers to unknown placement class `{class}`")]
    UnknownPlacementClass { district: District, class: String },
}

/// On-disk layout of the district rules: named rule sets, and the rule set each district uses.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DistrictRulesFile {
    placement_classes: HashMap<String, DistrictPlacementRule>,
    districts: HashMap<District, String>,
}

/// Immutable placement rules, keyed by district and improvement type.
///
/// A type without entry has no constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    pub district_rules: HashMap<District, DistrictPlacementRule>,
    pub improvement_rules: HashMap<Improvement, ImprovementPlacementRule>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::new()
    }
}

impl Ruleset {
    /// Loads the rules embedded in the crate.
    pub fn new() -> Self {
        Self::from_json_strs(
            include_str!("../jsons/DistrictPlacementRules.json"),
            include_str!("../jsons/ImprovementPlacementRules.json"),
        )
        .unwrap_or_else(|error| panic!("Can't serde the embedded placement rules: {error}"))
    }

    /// Loads custom rule tables. Both strings may contain `//` and `/* */` comments.
    pub fn from_json_strs(
        district_rules_json: &str,
        improvement_rules_json: &str,
    ) -> Result<Self, RulesetError> {
        let DistrictRulesFile {
            placement_classes,
            districts,
        } = parse_json_with_comments(district_rules_json, DISTRICT_RULES_FILE)?;

        let district_rules = districts
            .into_iter()
            .map(|(district, class)| match placement_classes.get(&class) {
                Some(rule) => Ok((district, rule.clone())),
                None => Err(RulesetError::UnknownPlacementClass { district, class }),
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        let improvement_rules =
            parse_json_with_comments(improvement_rules_json, IMPROVEMENT_RULES_FILE)?;

        Ok(Self {
            district_rules,
            improvement_rules,
        })
    }

    #[inline]
    pub fn district_rule(&self, district: District) -> Option<&DistrictPlacementRule> {
        self.district_rules.get(&district)
    }

    #[inline]
    pub fn improvement_rule(&self, improvement: Improvement) -> Option<&ImprovementPlacementRule> {
        self.improvement_rules.get(&improvement)
    }
}

fn parse_json_with_comments<T: DeserializeOwned>(
    json_with_comments: &str,
    file: &'static str,
) -> Result<T, RulesetError> {
    let json = strip_json_comments(json_with_comments, true);
    serde_json::from_str(&json).map_err(|source| RulesetError::Json { file, source })
}

/// Take a JSON string with comments and return the version without comments
/// which can be parsed well by serde_json as the standard JSON string.
/// Support line comment(//...) and block comment(/*...*/)
/// When preserve_locations is true this function will replace all the comments with spaces, so that JSON parsing
/// errors can point to the right location.
pub fn strip_json_comments(json_with_comments: &str, preserve_locations: bool) -> String {
    let mut json_without_comments = String::with_capacity(json_with_comments.len());
    let mut chars = json_with_comments.chars().peekable();
    let mut is_in_string = false;
    let mut is_escaped = false;

    // Newlines inside comments are always kept so that line numbers stay valid.
    let blank = |output: &mut String, comment_char: char| {
        if comment_char == '\n' {
            output.push('\n');
        } else if preserve_locations {
            output.push(' ');
        }
    };

    while let Some(cur_char) = chars.next() {
        if is_in_string {
            json_without_comments.push(cur_char);
            match cur_char {
                _ if is_escaped => is_escaped = false,
                '\\' => is_escaped = true,
                '"' => is_in_string = false,
                _ => {}
            }
            continue;
        }

        match (cur_char, chars.peek()) {
            ('"', _) => {
                is_in_string = true;
                json_without_comments.push(cur_char);
            }
            ('/', Some('/')) => {
                blank(&mut json_without_comments, cur_char);
                for comment_char in chars.by_ref() {
                    blank(&mut json_without_comments, comment_char);
                    if comment_char == '\n' {
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                blank(&mut json_without_comments, cur_char);
                if let Some(star) = chars.next() {
                    blank(&mut json_without_comments, star);
                }
                let mut last_char = None;
                for comment_char in chars.by_ref() {
                    blank(&mut json_without_comments, comment_char);
                    if last_char == Some('*') && comment_char == '/' {
                        break;
                    }
                    last_char = Some(comment_char);
                }
            }
            _ => json_without_comments.push(cur_char),
        }
    }

    json_without_comments
}

#[cfg(test)]
mod tests {
    use enum_map::Enum;

    use super::{Ruleset, RulesetError, strip_json_comments};
    use crate::tile_component::{District, Feature, Improvement, Resource, ResourceType, Terrain};

    #[test]
    fn embedded_rules_cover_every_district_and_improvement() {
        let ruleset = Ruleset::new();
        assert_eq!(ruleset.district_rules.len(), District::LENGTH);
        assert_eq!(ruleset.improvement_rules.len(), Improvement::LENGTH);
    }

    #[test]
    fn districts_share_their_placement_class() {
        let ruleset = Ruleset::new();
        assert_eq!(
            ruleset.district_rule(District::Campus),
            ruleset.district_rule(District::TheaterSquare)
        );
        assert_eq!(
            ruleset.district_rule(District::Harbor),
            ruleset.district_rule(District::WaterPark)
        );

        let aerodrome = ruleset.district_rule(District::Aerodrome).unwrap();
        assert!(aerodrome.requires_flat_land && aerodrome.requires_city);

        let city_center = ruleset.district_rule(District::CityCenter).unwrap();
        assert!(!city_center.requires_city);
        assert_eq!(city_center.invalid_features, vec![Feature::Oasis]);

        let dam = ruleset.district_rule(District::Dam).unwrap();
        assert_eq!(dam.required_features, Some(vec![Feature::Floodplains]));
        assert!(dam.requires_two_river_edges);
        assert_eq!(
            dam.invalid_resource_types,
            vec![
                ResourceType::Strategic,
                ResourceType::Luxury,
                ResourceType::Artifact
            ]
        );
    }

    #[test]
    fn improvement_rules_are_loaded() {
        let ruleset = Ruleset::new();
        let fishing_boats = ruleset.improvement_rule(Improvement::FishingBoats).unwrap();
        assert_eq!(
            fishing_boats.required_terrain,
            Some(vec![Terrain::Coast, Terrain::Ocean, Terrain::Lake])
        );
        let plantation = ruleset.improvement_rule(Improvement::Plantation).unwrap();
        assert!(
            plantation
                .required_resources
                .as_ref()
                .is_some_and(|resources| resources.contains(&Resource::Wine))
        );
    }

    #[test]
    fn custom_rules_may_leave_types_unconstrained() {
        let ruleset = Ruleset::from_json_strs(
            r#"{ "placementClasses": { "only": { "requiresFlatLand": true } },
                 "districts": { "campus": "only" } }"#,
            "{}",
        )
        .unwrap();
        assert!(ruleset.district_rule(District::Campus).is_some());
        assert!(ruleset.district_rule(District::Harbor).is_none());
        assert!(ruleset.improvement_rule(Improvement::Farm).is_none());
    }

    #[test]
    fn unknown_placement_class_is_an_error() {
        let error = Ruleset::from_json_strs(
            r#"{ "placementClasses": {}, "districts": { "campus": "missing" } }"#,
            "{}",
        )
        .unwrap_err();
        assert!(matches!(
            error,
            RulesetError::UnknownPlacementClass { district: District::Campus, ref class } if class == "missing"
        ));
    }

    #[test]
    fn malformed_rules_are_an_error() {
        let error = Ruleset::from_json_strs(
            r#"{ "placementClasses": {}, "districts": {} }"#,
            r#"{ "farm": { "invalidTerrain": ["lava"] } }"#,
        )
        .unwrap_err();
        assert!(matches!(error, RulesetError::Json { .. }));
    }

    #[test]
    fn strip_comments_keeps_strings_and_locations() {
        let json = "{\n  // line comment\n  \"a\": \"//not a comment\", /* block\n  */ \"b\": \"\\\"/*\"\n}";
        let stripped = strip_json_comments(json, true);
        assert_eq!(stripped.lines().count(), json.lines().count());
        assert_eq!(stripped.len(), json.len());
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["a"], "//not a comment");
        assert_eq!(value["b"], "\"/*");
    }
}
