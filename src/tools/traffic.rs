use chrono::Utc;
use lambda_runtime::tracing::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::error::AppError;
use crate::models::scanner::Packet;
use crate::models::validation::Validate;
use crate::models::{
    AnomalyList, ListAnomaliesRequest, ListPacketsRequest, PacketPage, ProtocolStatisticsList,
    ProtocolStatisticsRequest,
};
use crate::sample_data;

pub const PACKETS_PER_PAGE: usize = 10;

/// Lists one page of sample traffic, filtered by protocol and search term.
///
/// Without a `seed` the packet set is regenerated on every call, so pages from
/// separate calls do not line up.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for an unknown protocol filter.
pub fn list_packets(request: ListPacketsRequest) -> Result<PacketPage, AppError> {
    request.validate()?;

    let mut rng = request
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let packets = sample_data::packets(&mut rng, Utc::now());

    let page = paginate(filter_packets(packets, &request), request.page.unwrap_or(1));
    info!(
        page = page.page,
        total_pages = page.total_pages,
        total_matches = page.total_matches,
        "Listed packets"
    );
    Ok(page)
}

/// Applies the protocol filter and the search term.
///
/// The search term is used as given: it matches source and destination as
/// substrings and the summary case-insensitively.
#[must_use]
pub fn filter_packets(packets: Vec<Packet>, request: &ListPacketsRequest) -> Vec<Packet> {
    let protocol = request.protocol_filter();
    let search = request.search.as_deref().unwrap_or("");
    let search_lower = search.to_lowercase();

    debug!(?protocol, search = %search, "Filtering packets");

    packets
        .into_iter()
        .filter(|p| protocol.is_none_or(|wanted| p.protocol == wanted))
        .filter(|p| {
            search.is_empty()
                || p.source.contains(search)
                || p.destination.contains(search)
                || p.summary.to_lowercase().contains(&search_lower)
        })
        .collect()
}

/// Cuts one page out of `packets`.
///
/// `page` is 1-based and clamped into range; an empty input yields page 0 of 0.
#[must_use]
pub fn paginate(packets: Vec<Packet>, page: usize) -> PacketPage {
    let total_matches = packets.len();
    let total_pages = total_matches.div_ceil(PACKETS_PER_PAGE);

    if total_pages == 0 {
        return PacketPage {
            packets: Vec::new(),
            page: 0,
            total_pages: 0,
            total_matches: 0,
            page_size: PACKETS_PER_PAGE,
        };
    }

    let page = page.clamp(1, total_pages);
    let start = (page - 1) * PACKETS_PER_PAGE;

    PacketPage {
        packets: packets
            .into_iter()
            .skip(start)
            .take(PACKETS_PER_PAGE)
            .collect(),
        page,
        total_pages,
        total_matches,
        page_size: PACKETS_PER_PAGE,
    }
}

/// Lists detected anomalies, optionally only those of one severity.
///
/// # Errors
///
/// Does not currently fail; returns `Result` like every other tool.
pub fn list_anomalies(request: ListAnomaliesRequest) -> Result<AnomalyList, AppError> {
    let anomalies = sample_data::anomalies(Utc::now())
        .into_iter()
        .filter(|a| request.severity.is_none_or(|s| a.severity == s))
        .collect::<Vec<_>>();

    info!(count = anomalies.len(), "Listed anomalies");
    Ok(AnomalyList { anomalies })
}

/// Returns aggregated traffic statistics per protocol.
///
/// # Errors
///
/// Does not currently fail; returns `Result` like every other tool.
pub fn get_protocol_statistics(
    request: ProtocolStatisticsRequest,
) -> Result<ProtocolStatisticsList, AppError> {
    let protocols = sample_data::protocol_statistics()
        .into_iter()
        .filter(|s| request.protocol.is_none_or(|p| s.protocol == p))
        .collect::<Vec<_>>();

    info!(count = protocols.len(), "Listed protocol statistics");
    Ok(ProtocolStatisticsList { protocols })
}
