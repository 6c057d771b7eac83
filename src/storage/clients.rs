//! Client repository for the line-based clients file
//!
//! Every call reads or rewrites the whole file; nothing is cached between
//! operations.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::MalformedPolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::ClientRecord;

use super::codec::{decode, encode};
use super::file_io::{append_line, read_lines, write_lines_atomic};

/// Repository for client record persistence
pub struct ClientRepository {
    path: PathBuf,
    malformed: MalformedPolicy,
}

impl ClientRepository {
    /// Create a new client repository
    pub fn new(path: PathBuf, malformed: MalformedPolicy) -> Self {
        Self { path, malformed }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode every line, keeping the per-line outcome
    pub fn load_checked(&self) -> LedgerResult<Vec<LedgerResult<ClientRecord>>> {
        let lines = read_lines(&self.path)?;
        Ok(lines.iter().map(|line| decode(line)).collect())
    }

    /// Load all clients in file order
    ///
    /// A missing file is an empty collection. Undecodable lines are either
    /// replaced by a zero-value record or dropped, depending on the policy.
    pub fn load_all(&self) -> LedgerResult<Vec<ClientRecord>> {
        let decoded = self.load_checked()?;
        let mut clients = Vec::with_capacity(decoded.len());

        for (line_num, result) in decoded.into_iter().enumerate() {
            match result {
                Ok(client) => clients.push(client),
                Err(err) => {
                    warn!(
                        "{} line {}: {} ({:?})",
                        self.path.display(),
                        line_num + 1,
                        err,
                        self.malformed
                    );
                    if self.malformed == MalformedPolicy::Keep {
                        clients.push(ClientRecord::default());
                    }
                }
            }
        }

        debug!("loaded {} clients from {}", clients.len(), self.path.display());
        Ok(clients)
    }

    /// Rewrite the file with exactly these clients, in order
    pub fn save_all(&self, clients: &[ClientRecord]) -> LedgerResult<()> {
        let lines = clients
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, LedgerError>>()?;

        write_lines_atomic(&self.path, &lines)?;
        debug!("saved {} clients to {}", lines.len(), self.path.display());
        Ok(())
    }

    /// Append one client without reading the existing file
    pub fn append_one(&self, client: &ClientRecord) -> LedgerResult<()> {
        let line = encode(client)?;
        append_line(&self.path, &line)?;
        debug!("appended client {} to {}", client.account_number, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo(policy: MalformedPolicy) -> (TempDir, ClientRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Clients.txt");
        let repo = ClientRepository::new(path, policy);
        (temp_dir, repo)
    }

    fn client(account: &str, cents: i64) -> ClientRecord {
        ClientRecord::new(account, "1234", "Test", "555", Money::from_cents(cents))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_load() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);

        let alice = ClientRecord::new("100", "1234", "Alice", "555", Money::from_cents(5000));
        repo.append_one(&alice).unwrap();

        let clients = repo.load_all().unwrap();
        assert_eq!(clients, vec![alice]);
    }

    #[test]
    fn test_save_preserves_order() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);

        let clients = vec![client("300", 1), client("100", 2), client("200", 3)];
        repo.save_all(&clients).unwrap();

        assert_eq!(repo.load_all().unwrap(), clients);
    }

    #[test]
    fn test_save_load_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);
        repo.save_all(&[client("100", 5000), client("200", 1000)])
            .unwrap();

        let first = repo.load_all().unwrap();
        repo.save_all(&first).unwrap();
        let second = repo.load_all().unwrap();

        assert_eq!(first, second);
        let raw = std::fs::read_to_string(repo.path()).unwrap();
        repo.save_all(&second).unwrap();
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), raw);
    }

    #[test]
    fn test_malformed_line_kept_as_zero_record() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);
        std::fs::write(
            repo.path(),
            "100#//#4567#//#Alice#//#555#//#50.00\nbroken#//#line#//#here\n",
        )
        .unwrap();

        let clients = repo.load_all().unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].account_number, "100");
        assert_eq!(clients[1], ClientRecord::default());
    }

    #[test]
    fn test_malformed_line_skipped() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Skip);
        std::fs::write(
            repo.path(),
            "broken#//#line#//#here\n100#//#4567#//#Alice#//#555#//#50.00\n",
        )
        .unwrap();

        let clients = repo.load_all().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Alice");
    }

    #[test]
    fn test_load_checked_reports_each_line() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);
        std::fs::write(
            repo.path(),
            "100#//#4567#//#Alice#//#555#//#50.00\n200#//#4567#//#Bob#//#555#//#n/a\n",
        )
        .unwrap();

        let results = repo.load_checked().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(LedgerError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_save_fails_without_partial_write() {
        let (_temp_dir, repo) = create_test_repo(MalformedPolicy::Keep);
        repo.save_all(&[client("100", 5000)]).unwrap();

        // A PIN that cannot be shifted aborts before the file is touched
        let mut bad = client("200", 0);
        bad.pin_code = char::MAX.to_string();
        assert!(repo.save_all(&[client("100", 0), bad]).is_err());

        assert_eq!(repo.load_all().unwrap(), vec![client("100", 5000)]);
    }
}
