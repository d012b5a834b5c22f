//! Line codec for the roster data file.
//!
//! One candidate per line: `name|cgpa|experience|skill1,skill2,...`.
//! Neither separator is escaped, so names and skills must not contain `|` or `,`.

use crate::domain::model::Candidate;
use crate::utils::error::{CodecError, Result, RosterError};

pub const FIELD_SEPARATOR: &str = "|";
pub const SKILL_SEPARATOR: &str = ",";

pub fn serialize(candidate: &Candidate) -> String {
    format!(
        "{name}{sep}{cgpa}{sep}{exp}{sep}{skills}",
        name = candidate.name,
        cgpa = candidate.cgpa,
        exp = candidate.experience,
        skills = candidate.skills.join(SKILL_SEPARATOR),
        sep = FIELD_SEPARATOR,
    )
}

/// Parses one line. Everything after the third `|` is the skills blob, and an
/// empty blob means no skills rather than a single empty skill.
pub fn deserialize(line: &str) -> std::result::Result<Candidate, CodecError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.splitn(4, FIELD_SEPARATOR).collect();
    let [name, cgpa, experience, skills] = fields.as_slice() else {
        return Err(CodecError::MissingFields {
            found: fields.len(),
        });
    };

    let cgpa = cgpa
        .trim()
        .parse::<f64>()
        .map_err(|_| CodecError::InvalidCgpa {
            value: cgpa.to_string(),
        })?;
    let experience = experience
        .trim()
        .parse::<u32>()
        .map_err(|_| CodecError::InvalidExperience {
            value: experience.to_string(),
        })?;

    let skills = if skills.is_empty() {
        Vec::new()
    } else {
        skills.split(SKILL_SEPARATOR).map(str::to_string).collect()
    };

    Ok(Candidate {
        name: name.to_string(),
        cgpa,
        experience,
        skills,
        primary_language: None,
    })
}

/// Parses a whole data file, skipping blank lines. UTF-8 is checked per line,
/// so a stray byte is reported as a parse error on its 1-based line.
pub fn decode_all(data: &[u8]) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    for (index, raw) in data.split(|&byte| byte == b'\n').enumerate() {
        let parse_error = |source: CodecError| RosterError::ParseError {
            line: index + 1,
            source,
        };
        let line = std::str::from_utf8(raw).map_err(|e| {
            parse_error(CodecError::InvalidEncoding {
                column: e.valid_up_to() + 1,
            })
        })?;
        if line.trim().is_empty() {
            continue;
        }
        candidates.push(deserialize(line).map_err(parse_error)?);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_line_layout() {
        let c = Candidate::new("Alice", 8.5, 3, ["Python", "Go"]);
        assert_eq!(serialize(&c), "Alice|8.5|3|Python,Go");
    }

    #[test]
    fn test_serialize_without_skills_leaves_empty_segment() {
        let c = Candidate::new("Eve", 7.0, 0, Vec::<String>::new());
        assert_eq!(serialize(&c), "Eve|7|0|");
    }

    #[test]
    fn test_deserialize_reference_line() {
        let c = deserialize("Alice|8.50|3|Python,Go").unwrap();
        assert_eq!(c.name, "Alice");
        assert_eq!(c.cgpa, 8.5);
        assert_eq!(c.experience, 3);
        assert_eq!(c.skills, vec!["Python", "Go"]);
    }

    #[test]
    fn test_deserialize_empty_blob_yields_no_skills() {
        let c = deserialize("Eve|7|0|").unwrap();
        assert!(c.skills.is_empty());
        assert_eq!(deserialize(&serialize(&c)).unwrap(), c);
    }

    #[test]
    fn test_deserialize_keeps_duplicate_and_inner_empty_skills() {
        let c = deserialize("Dan|6.1|2|Go,,Go").unwrap();
        assert_eq!(c.skills, vec!["Go", "", "Go"]);
    }

    #[test]
    fn test_deserialize_extra_pipe_goes_to_skills_blob() {
        let c = deserialize("Ann|9|4|C|C++").unwrap();
        assert_eq!(c.skills, vec!["C|C++"]);
    }

    #[test]
    fn test_deserialize_tolerates_crlf_and_padding() {
        let c = deserialize("Bob| 9.20 | 1 |Rust\r").unwrap();
        assert_eq!(c.cgpa, 9.2);
        assert_eq!(c.experience, 1);
        assert_eq!(c.skills, vec!["Rust"]);
    }

    #[test]
    fn test_deserialize_rejects_short_lines() {
        assert_eq!(
            deserialize("Alice|8.5|3"),
            Err(CodecError::MissingFields { found: 3 })
        );
        assert_eq!(deserialize("Alice"), Err(CodecError::MissingFields { found: 1 }));
    }

    #[test]
    fn test_deserialize_rejects_bad_numbers() {
        assert!(matches!(
            deserialize("Alice|high|3|Go"),
            Err(CodecError::InvalidCgpa { .. })
        ));
        assert!(matches!(
            deserialize("Alice|8.5|three|Go"),
            Err(CodecError::InvalidExperience { .. })
        ));
        assert!(matches!(
            deserialize("Alice|8.5|-1|Go"),
            Err(CodecError::InvalidExperience { .. })
        ));
    }

    #[test]
    fn test_decode_all_skips_blank_lines() {
        let roster = decode_all(b"\nAlice|8.5|3|Go\r\n   \n\nBob|9.2|1|Rust").unwrap();
        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(decode_all(b"").unwrap().is_empty());
    }

    #[test]
    fn test_decode_all_reports_one_based_line_numbers() {
        let err = decode_all(b"A|1|1|x\nbroken").unwrap_err();
        assert!(matches!(
            err,
            RosterError::ParseError {
                line: 2,
                source: CodecError::MissingFields { found: 1 }
            }
        ));
    }

    #[test]
    fn test_decode_all_latin1_name_is_encoding_error() {
        let err = decode_all(b"Alice|8.5|3|Go\nJos\xe9|8.5|3|Go\n").unwrap_err();
        assert!(matches!(
            err,
            RosterError::ParseError {
                line: 2,
                source: CodecError::InvalidEncoding { column: 4 }
            }
        ));
    }

    #[test]
    fn test_round_trip_preserves_fractional_cgpa() {
        let c = Candidate::new("Zed", 7.123456789, 12, ["SQL"]);
        assert_eq!(deserialize(&serialize(&c)).unwrap(), c);
    }
}
