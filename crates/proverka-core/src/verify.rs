use async_trait::async_trait;

use crate::error::Result;
use crate::types::Claim;

/// Fact-checking collaborator. Implementations may move claim status to
/// `Verified` or `False`; anything left untouched stays `Unknown`.
#[async_trait]
pub trait ClaimVerifier: Send + Sync {
    async fn verify(&self, claims: &mut [Claim]) -> Result<()>;
}

/// No fact-checking backend is wired in; every claim stays `Unknown`.
pub struct NoopVerifier;

#[async_trait]
impl ClaimVerifier for NoopVerifier {
    async fn verify(&self, _claims: &mut [Claim]) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClaimStatus;

    #[tokio::test]
    async fn noop_verifier_leaves_claims_unknown() {
        let mut claims = vec![Claim {
            text: "claim".to_string(),
            confidence: 50,
            status: ClaimStatus::Unknown,
            is_suspicious: false,
            keywords_found: vec![],
        }];
        NoopVerifier.verify(&mut claims).await.unwrap();
        assert_eq!(claims[0].status, ClaimStatus::Unknown);
    }
}
