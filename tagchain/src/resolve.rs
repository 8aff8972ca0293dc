use crate::{Family, UnresolvedTag, Variant};

/// Find the candidate of `F` whose tag equals `tag` exactly.
///
/// Candidates are tried in declaration order and the first match wins.
pub fn resolve<F: Family>(tag: &str) -> Result<&'static F, UnresolvedTag> {
    for (index, candidate) in F::CANDIDATES.iter().enumerate() {
        tracing::trace!(
            family = F::NAME,
            tag,
            index,
            candidate = candidate.tag(),
            "tagchain.resolve.candidate"
        );
        if candidate.tag() == tag {
            tracing::debug!(family = F::NAME, tag, index, "tagchain.resolve.matched");
            return Ok(candidate);
        }
    }

    tracing::warn!(family = F::NAME, tag, "tagchain.resolve.unresolved");
    Err(UnresolvedTag::new(F::NAME, tag))
}

/// Like [`resolve`], erasing the family type.
pub fn resolve_variant<F: Family>(tag: &str) -> Result<&'static dyn Variant, UnresolvedTag> {
    let variant: &'static F = resolve::<F>(tag)?;
    Ok(variant)
}
