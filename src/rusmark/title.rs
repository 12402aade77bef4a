//! Title resolution
//!
//! A record's title comes from a three-tier fallback: the primary title
//! field (200, with publication data from its 210 companion), then the
//! subject-heading field (601), then the linked-set field (461). The first
//! tier producing non-empty text wins; if all fail the record gets no title.

use super::assembler::TaggedGroups;
use super::subfields::{subfield_map, subfield_map_any_case, subfield_map_sparse};

/// Resolve the single most authoritative title for a block, if any.
pub fn resolve(groups: &TaggedGroups) -> Option<String> {
    primary_title(groups)
        .or_else(|| heading_title(groups))
        .or_else(|| linked_set_title(groups))
}

/// Tier 1: tag 200. Requires a non-empty `^A`; without one the whole tier
/// is skipped even when `^E`/`^F` are present.
fn primary_title(groups: &TaggedGroups) -> Option<String> {
    let occurrences = groups.get("200")?;
    // "At most one 210 expected"; a repeated 210 keeps the last occurrence.
    let publication = groups
        .get("210")
        .and_then(|values| values.last())
        .map(|value| subfield_map(value));

    for raw in occurrences {
        let parts = subfield_map_sparse(raw);
        let get = |code: char| parts.get(&code).map(|s| s.trim()).unwrap_or("");

        let main = get('A');
        if main.is_empty() {
            continue;
        }

        let mut title = main.to_string();
        if !get('E').is_empty() {
            title.push_str(" : ");
            title.push_str(get('E'));
        }
        if !get('F').is_empty() {
            title.push_str(" / ");
            title.push_str(get('F'));
        }

        if let Some(publication) = &publication {
            let get = |code: char| publication.get(&code).map(|s| s.trim()).unwrap_or("");
            let mut info = [get('A'), get('C')]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" : ");
            if !get('D').is_empty() {
                info.push_str(", ");
                info.push_str(get('D'));
            }
            if !info.is_empty() {
                title.push_str(". - ");
                title.push_str(&info);
                title.push('.');
            }
        }

        return Some(title);
    }
    None
}

/// Tier 2: tag 601, subfields `P, E, D, S` joined with `", "`.
fn heading_title(groups: &TaggedGroups) -> Option<String> {
    for raw in groups.get("601")? {
        let parts = subfield_map_sparse(raw);
        let joined = ['P', 'E', 'D', 'S']
            .iter()
            .filter_map(|code| parts.get(code))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }
    None
}

/// Tier 3: tag 461, subfields `c, e, d, f, g`; each code prefers the
/// lowercase marker and falls back to its uppercase twin.
fn linked_set_title(groups: &TaggedGroups) -> Option<String> {
    for raw in groups.get("461")? {
        let parts = subfield_map_any_case(raw);
        let pick = |code: char| {
            parts
                .get(&code)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .or_else(|| {
                    parts
                        .get(&code.to_ascii_uppercase())
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                })
        };
        let joined = ['c', 'e', 'd', 'f', 'g']
            .iter()
            .filter_map(|code| pick(*code))
            .collect::<Vec<_>>()
            .join(", ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }
    None
}
