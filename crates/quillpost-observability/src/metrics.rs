//! Authorization metrics.

use metrics::counter;

/// Counts one authorization decision.
///
/// `outcome` is `"allow"` or `"deny"`; `reason` is the deny reason, or `"none"`
/// for allows.
pub fn track_authz_decision(outcome: &'static str, reason: &'static str) {
    counter!("authz_decisions_total", "outcome" => outcome, "reason" => reason).increment(1);
}

/// Counts a policy name served from the resolver cache.
pub fn track_policy_cache_hit() {
    counter!("authz_policy_cache_hits_total").increment(1);
}
