//! Repeat motif helpers.

use itertools::Itertools;

/// Nucleotides that an ambiguous `N` in a motif can stand for.
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Returns the length of a motif in nucleotides.
pub fn motif_length(motif: &str) -> usize {
    motif.chars().count()
}

/// Returns the length of the longest motif, or 0 if there are none.
///
/// ## Examples
///
/// ```rust
/// use strchive::locus::motif::max_motif_length;
///
/// assert_eq!(max_motif_length(&["AAG", "AAGG"]), 4);
/// assert_eq!(max_motif_length::<&str>(&[]), 0);
/// ```
pub fn max_motif_length<S: AsRef<str>>(motifs: &[S]) -> usize {
    motifs.iter().map(|m| motif_length(m.as_ref())).max().unwrap_or(0)
}

/// Returns all cyclical rotations of the motifs.
///
/// Motifs containing an ambiguous `N` are additionally expanded with every
/// nucleotide substituted for `N`. Output is in first-seen order without duplicates.
///
/// ## Examples
///
/// ```rust
/// use strchive::locus::motif::cyclical_variations;
///
/// assert_eq!(cyclical_variations(&["CAG"]), ["CAG", "GCA", "AGC"]);
/// assert_eq!(cyclical_variations(&["AA"]), ["AA"]);
/// assert_eq!(cyclical_variations(&["GN"]).len(), 9);
/// ```
pub fn cyclical_variations<S: AsRef<str>>(motifs: &[S]) -> Vec<String> {
    motifs.iter().flat_map(|motif| variations(motif.as_ref())).unique().collect()
}

fn variations(motif: &str) -> Vec<String> {
    let mut output = Vec::new();
    if motif.contains('N') {
        for n in NUCLEOTIDES {
            output.extend(variations(&motif.replace('N', &n.to_string())));
        }
    }
    output.extend(rotations(motif));
    output
}

/// Returns every rotation of a motif, starting with the motif itself.
fn rotations(motif: &str) -> Vec<String> {
    let chars = motif.chars().collect_vec();
    (0..chars.len())
        .map(|i| {
            let split = chars.len() - i;
            chars[split..].iter().chain(chars[..split].iter()).collect::<String>()
        })
        .collect()
}
