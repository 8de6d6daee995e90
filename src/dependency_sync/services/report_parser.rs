use crate::dependency_sync::domain::PackageName;

/// Heading that starts the section this tool consumes
const MISSING_HEADING: &str = "missing dependencies";

/// Heading for the section this tool explicitly ignores
const OBSOLETE_HEADING: &str = "obsolete dependencies";

/// ReportParser service for extracting the missing-dependency list
/// from the analyzer's textual report.
///
/// This service contains pure text-scanning logic. It has no I/O
/// dependencies and works only with domain objects.
pub struct ReportParser;

impl ReportParser {
    /// Extracts the ordered list of missing package names from a report.
    ///
    /// The scan is a small flag machine over the report lines:
    /// - a line matching the "obsolete dependencies" heading suppresses
    ///   capture (guard against the analyzer reordering its sections)
    /// - a line matching the "missing dependencies" heading enables capture;
    ///   the heading line itself is never captured
    /// - a blank line disables capture
    /// - while capturing, the first whitespace-delimited token of each line
    ///   is taken as a package name
    ///
    /// Heading matching is case-insensitive. A report with no missing
    /// section yields an empty list.
    ///
    /// A captured token that is not a usable package name (oversized, or
    /// containing control characters) is dropped rather than failing the
    /// whole extraction; the analyzer never emits such tokens, and a name
    /// the manager cannot receive as an argument has nothing to be added.
    pub fn extract_missing(report: &str) -> Vec<PackageName> {
        let mut capturing = false;
        let mut missing = Vec::new();

        for line in report.lines() {
            let lower = line.to_lowercase();

            if lower.contains(OBSOLETE_HEADING) {
                capturing = false;
                continue;
            }
            if lower.contains(MISSING_HEADING) {
                capturing = true;
                continue;
            }
            if line.trim().is_empty() {
                capturing = false;
                continue;
            }
            if capturing {
                if let Some(token) = line.split_whitespace().next() {
                    if let Ok(name) = PackageName::new(token) {
                        missing.push(name);
                    }
                }
            }
        }

        missing
    }
}
