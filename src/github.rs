#[derive(Debug, Clone, serde::Deserialize)]
pub struct Repository {
    pub name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Pusher {
    pub name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct HeadCommit {
    pub id: String,
    pub url: String,
    pub message: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PushEvent {
    pub repository: Repository,
    pub pusher: Pusher,
    pub head_commit: HeadCommit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_push_payload() {
        let event: PushEvent = serde_json::from_str(
            r#"{
                "ref": "refs/heads/master",
                "repository": { "name": "prov", "full_name": "conreality/prov" },
                "pusher": { "name": "alice", "email": "alice@example.org" },
                "head_commit": {
                    "id": "da39a3ee5e6b4b0d3255bfef95601890afd80709",
                    "url": "https://example.org/c/da39a3e",
                    "message": "Initial commit",
                    "timestamp": "2021-02-03T04:05:06Z"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(event.repository.name, "prov");
        assert_eq!(event.pusher.name, "alice");
        assert_eq!(event.head_commit.id, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(event.head_commit.message, "Initial commit");
    }

    #[test]
    fn rejects_payload_without_head_commit() {
        let result = serde_json::from_str::<PushEvent>(
            r#"{ "repository": { "name": "prov" }, "pusher": { "name": "alice" } }"#,
        );
        assert!(result.is_err());
    }
}
