use anyhow::{Error, Result};

use crate::docker::format::{
    parse_containers, parse_images, parse_stats, ContainerRecord, ImageRecord, StatsRecord, CONTAINERS_FORMAT,
    IMAGES_FORMAT, STATS_FORMAT,
};
use crate::docker::inspect::{parse_inspect, InspectRecord};
use crate::docker::DockerCli;

impl DockerCli<'_> {
    /// Local images whose repository lives under `namespace`.
    pub fn list_images(&self, namespace: &str) -> Result<Vec<ImageRecord>> {
        let output = self
            .exec_stdout(&["images", "--format", IMAGES_FORMAT])
            .map_err(|err| Error::msg(format!("Error listing Docker images: {}", err)))?;
        Ok(parse_images(&output, namespace))
    }

    /// Running and stopped containers.
    pub fn list_containers(&self) -> Result<Vec<ContainerRecord>> {
        let output = self
            .exec_stdout(&["ps", "-a", "--format", CONTAINERS_FORMAT])
            .map_err(|err| Error::msg(format!("Error listing containers: {}", err)))?;
        Ok(parse_containers(&output))
    }

    /// One snapshot of the stats of every running container.
    pub fn container_stats(&self) -> Result<Vec<StatsRecord>> {
        let output = self
            .exec_stdout(&["container", "stats", "--no-stream", "--format", STATS_FORMAT])
            .map_err(|err| Error::msg(format!("Error retrieving container stats: {}", err)))?;
        Ok(parse_stats(&output))
    }

    pub fn container_info(&self, container_id: &str) -> Result<InspectRecord> {
        let output = self
            .exec_stdout(&["inspect", container_id])
            .map_err(|err| Error::msg(format!("Error inspecting container {}: {}", container_id, err)))?;
        parse_inspect(container_id, &output)
            .map_err(|err| Error::msg(format!("Failed to get container info for container {}: {:#}", container_id, err)))
    }
}
