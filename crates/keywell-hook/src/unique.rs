use crate::error::Result;
use keywell_core::{Document, FieldValue, ReadCollection};
use keywell_generator::KeyGenerator;
use tracing::trace;

/// Generates a value for `field` that no document in `collection`
/// carries at the time of the check.
///
/// Each iteration asks the generator for a candidate and probes the
/// collection for an exact match; an empty probe accepts the candidate.
/// Collisions retry immediately, with no backoff and no attempt cap, so
/// a generator whose domain the collection has nearly exhausted can keep
/// this looping forever.
///
/// Probe and generator failures abort the loop unchanged; only a
/// successful probe that finds a collision causes a retry. The document
/// is read, never written: assigning the returned value is the caller's
/// job. Nothing prevents two concurrent calls from settling on the same
/// value before either caller inserts; a uniqueness constraint in the
/// backing store is the only hard guarantee.
pub async fn generate_unique_value<C, G>(
    collection: &C,
    document: &Document,
    field: &str,
    generator: &G,
) -> Result<FieldValue>
where
    C: ReadCollection,
    G: KeyGenerator,
{
    loop {
        let candidate: FieldValue = generator.generate(document)?.into();
        if collection.find_one(field, &candidate).await?.is_none() {
            return Ok(candidate);
        }
        trace!(field = %field, "candidate value collided, generating another");
    }
}
