use anyhow::{Error, Result};
use log::{info, warn};

use crate::docker::format::{find_image_id, ID_FORMAT, IMAGE_ID_FORMAT};
use crate::docker::DockerCli;

/// Per-container outcome of a delete, containers are cleaned up best-effort.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub removed_containers: Vec<String>,
    pub failed_containers: Vec<String>,
}

impl DockerCli<'_> {
    pub fn pull_image(&self, repository: &str) -> Result<()> {
        self.exec_stdout(&["pull", repository])
            .map_err(|err| Error::msg(format!("Error pulling Docker image: {}", err)))?;
        info!("pulled {}", repository);
        Ok(())
    }

    /// `docker run -d`, returns the new container id.
    pub fn start_image(&self, repository: &str) -> Result<String> {
        self.exec_stdout(&["run", "-d", repository])
            .map_err(|err| Error::msg(format!("Error starting container from {}: {}", repository, err)))
    }

    /// Ids of every container created from `repository`, running or not.
    pub fn containers_of(&self, repository: &str) -> Result<Vec<String>> {
        let filter = format!("ancestor={}", repository);
        let output = self.exec_stdout(&["ps", "-a", "--filter", filter.as_str(), "--format", ID_FORMAT])?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Stops and removes every container of `repository`, then the image.
    ///
    /// A container that fails to stop or to be removed is logged and
    /// skipped. Only a failing `rmi` fails the whole delete.
    pub fn delete_image(&self, repository: &str) -> Result<DeleteReport> {
        let mut report = DeleteReport::default();
        let container_ids = match self.containers_of(repository) {
            Ok(ids) => ids,
            Err(err) => {
                warn!("Error listing containers of {}: {}", repository, err);
                Vec::new()
            }
        };
        for container_id in container_ids {
            if let Err(err) = self.exec_stdout(&["stop", container_id.as_str()]) {
                warn!("Error stopping container {}: {}", container_id, err);
                report.failed_containers.push(container_id);
                continue;
            }
            if let Err(err) = self.exec_stdout(&["rm", container_id.as_str()]) {
                warn!("Error removing container {}: {}", container_id, err);
                report.failed_containers.push(container_id);
                continue;
            }
            report.removed_containers.push(container_id);
        }
        self.exec_stdout(&["rmi", repository])
            .map_err(|err| Error::msg(format!("Error deleting Docker image: {}", err)))?;
        Ok(report)
    }

    /// Local image id of the first `repository:tag` starting with `repository`.
    pub fn image_id(&self, repository: &str) -> Result<Option<String>> {
        let output = self
            .exec_stdout(&["images", "--format", IMAGE_ID_FORMAT])
            .map_err(|err| Error::msg(format!("Error fetching image ID: {}", err)))?;
        Ok(find_image_id(&output, repository))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::FakeRunner;
    use crate::process::CommandOutput;

    #[test]
    fn delete_continues_past_failed_containers() -> Result<()> {
        let runner = FakeRunner::new()
            .reply(CommandOutput::ok("c1\nc2\nc3\n"))
            // c1 stops and is removed
            .reply(CommandOutput::ok("c1"))
            .reply(CommandOutput::ok("c1"))
            // c2 refuses to stop
            .reply(CommandOutput::failed("cannot stop c2"))
            // c3 stops but cannot be removed
            .reply(CommandOutput::ok("c3"))
            .reply(CommandOutput::failed("removal of c3 is already in progress"))
            // rmi
            .reply(CommandOutput::ok("Untagged: sudoacorn/repo1:latest"));
        let docker = DockerCli::new(&runner, "docker");

        let report = docker.delete_image("sudoacorn/repo1")?;
        assert_eq!(report.removed_containers, vec!["c1"]);
        assert_eq!(report.failed_containers, vec!["c2", "c3"]);
        assert_eq!(
            runner.calls(),
            vec![
                vec!["docker", "ps", "-a", "--filter", "ancestor=sudoacorn/repo1", "--format", "{{.ID}}"],
                vec!["docker", "stop", "c1"],
                vec!["docker", "rm", "c1"],
                vec!["docker", "stop", "c2"],
                vec!["docker", "stop", "c3"],
                vec!["docker", "rm", "c3"],
                vec!["docker", "rmi", "sudoacorn/repo1"],
            ]
        );
        Ok(())
    }

    #[test]
    fn delete_fails_when_rmi_fails() {
        let runner = FakeRunner::new()
            .reply(CommandOutput::ok(""))
            .reply(CommandOutput::failed("Error response from daemon: No such image: sudoacorn/repo1:latest"));
        let docker = DockerCli::new(&runner, "docker");
        let err = docker.delete_image("sudoacorn/repo1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error deleting Docker image: Error response from daemon: No such image: sudoacorn/repo1:latest"
        );
    }

    #[test]
    fn start_returns_container_id() -> Result<()> {
        let runner = FakeRunner::new().reply(CommandOutput::ok("4fa6e0f0c678\n"));
        let docker = DockerCli::new(&runner, "docker");
        assert_eq!(docker.start_image("sudoacorn/repo1")?, "4fa6e0f0c678");
        assert_eq!(runner.calls(), vec![vec!["docker", "run", "-d", "sudoacorn/repo1"]]);
        Ok(())
    }

    #[test]
    fn image_id_lookup() -> Result<()> {
        let runner = FakeRunner::new().reply(CommandOutput::ok("sudoacorn/repo1:latest|abc123\n"));
        let docker = DockerCli::new(&runner, "docker");
        assert_eq!(docker.image_id("sudoacorn/repo1")?, Some("abc123".to_string()));
        Ok(())
    }
}
