//! Property tests over the token set's span and round-trip invariants.
