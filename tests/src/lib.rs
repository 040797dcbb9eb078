//! Cross-crate scenarios exercising the full validate, build and layout
//! pipeline through the public api.

#[cfg(test)]
mod language_acceptance;
#[cfg(test)]
mod pipeline_invariants;
#[cfg(test)]
mod snapshot_serialization;
