//! `docker --format` templates and the records parsed from their output.
//!
//! Every template joins its fields with [`FIELD_SEPARATOR`]. A line that does
//! not split into exactly the expected number of fields is dropped whole.

use log::debug;
use serde::Serialize;

pub const FIELD_SEPARATOR: char = '|';

pub const IMAGES_FORMAT: &str = "{{.Repository}}|{{.Tag}}|{{.ID}}|{{.CreatedSince}}|{{.Size}}";
pub const CONTAINERS_FORMAT: &str =
    "{{.ID}}|{{.Image}}|{{.Command}}|{{.CreatedAt}}|{{.Status}}|{{.Ports}}|{{.Names}}";
pub const STATS_FORMAT: &str =
    "{{.Container}}|{{.Name}}|{{.CPUPerc}}|{{.MemUsage}}|{{.MemPerc}}|{{.NetIO}}|{{.BlockIO}}|{{.PIDs}}";
pub const IMAGE_ID_FORMAT: &str = "{{.Repository}}:{{.Tag}}|{{.ID}}";
pub const ID_FORMAT: &str = "{{.ID}}";

const MEM_USAGE_SEPARATOR: &str = " / ";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub repository: String,
    pub tag: String,
    pub image_id: String,
    pub created: String,
    pub size: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub container_id: String,
    pub image: String,
    pub command: String,
    pub created: String,
    pub status: String,
    pub ports: String,
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    pub container_id: String,
    pub name: String,
    pub cpu: String,
    pub mem_usage: String,
    pub mem_limit: String,
    pub mem_perc: String,
    pub net_io: String,
    pub block_io: String,
    pub pids: String,
}

/// Splits one output line into exactly `N` trimmed fields.
pub fn split_row<const N: usize>(line: &str) -> Option<[&str; N]> {
    let parts = line.split(FIELD_SEPARATOR).map(str::trim).collect::<Vec<&str>>();
    match <[&str; N]>::try_from(parts) {
        Ok(fields) => Some(fields),
        Err(parts) => {
            debug!("drop row with {} fields, expected {}: {:?}", parts.len(), N, line);
            None
        }
    }
}

/// Parses `docker images` output, keeping repositories under `namespace/`.
pub fn parse_images(output: &str, namespace: &str) -> Vec<ImageRecord> {
    let prefix = format!("{}/", namespace);
    output
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .filter_map(split_row::<5>)
        .map(|[repository, tag, image_id, created, size]| ImageRecord {
            repository: repository.to_string(),
            tag: tag.to_string(),
            image_id: image_id.to_string(),
            created: created.to_string(),
            size: size.to_string(),
        })
        .collect()
}

pub fn parse_containers(output: &str) -> Vec<ContainerRecord> {
    output
        .lines()
        .filter_map(split_row::<7>)
        .map(|[container_id, image, command, created, status, ports, name]| ContainerRecord {
            container_id: container_id.to_string(),
            image: image.to_string(),
            command: command.to_string(),
            created: created.to_string(),
            status: status.to_string(),
            ports: ports.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn parse_stats(output: &str) -> Vec<StatsRecord> {
    output
        .lines()
        .filter_map(split_row::<8>)
        .map(|[container_id, name, cpu, mem, mem_perc, net_io, block_io, pids]| {
            let (mem_usage, mem_limit) = split_mem_usage(mem);
            StatsRecord {
                container_id: container_id.to_string(),
                name: name.to_string(),
                cpu: cpu.to_string(),
                mem_usage,
                mem_limit,
                mem_perc: mem_perc.to_string(),
                net_io: net_io.to_string(),
                block_io: block_io.to_string(),
                pids: pids.to_string(),
            }
        })
        .collect()
}

/// `"200MiB / 2GiB"` into `("200MiB", "2GiB")`; the limit is empty when absent.
pub fn split_mem_usage(mem: &str) -> (String, String) {
    let mut split = mem.split(MEM_USAGE_SEPARATOR);
    let usage = split.next().unwrap_or_default().trim().to_string();
    let limit = split.next().unwrap_or_default().trim().to_string();
    (usage, limit)
}

/// First image id whose `repository:tag` starts with `repository`.
pub fn find_image_id(output: &str, repository: &str) -> Option<String> {
    output
        .lines()
        .filter_map(split_row::<2>)
        .find(|[repo_tag, _]| repo_tag.starts_with(repository))
        .map(|[_, image_id]| image_id.to_string())
}
