//! An in-process [`ProcessGroup`] backed by `std::sync::mpsc`, so the
//! parallel algorithms can be exercised by ordinary `cargo test` without a
//! system MPI installation. Each rank is expected to run on its own thread
//! (e.g. via `std::thread::scope`); channel FIFO order gives the same
//! per-round-then-receive ordering a real MPI implementation guarantees for
//! a fixed tag between a fixed pair of ranks.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::{
    edge::Edge,
    process_group::{Candidate, ProcessGroup},
};

/// One rank's handle into an in-process loopback process group.
pub struct LoopbackGroup {
    rank: usize,
    size: usize,
    send_to: Vec<Sender<(i32, Vec<Edge>)>>,
    recv_from: Vec<Receiver<(i32, Vec<Edge>)>>,
    candidate_tx: Sender<(usize, Candidate)>,
    candidate_rx: Option<Receiver<(usize, Candidate)>>,
    bcast_tx: Vec<Sender<i64>>,
    bcast_rx: Option<Receiver<i64>>,
}

/// Builds `size` [`LoopbackGroup`] handles, one per rank, wired together so
/// rank `i` can `send_edges`/`receive_edges` with any rank `j`, and rank 0
/// can `gather_candidates`/`broadcast_vertex` with every other rank.
#[must_use]
pub fn build_loopback_group(size: usize) -> Vec<LoopbackGroup> {
    // send_to[from][to] / recv_from[to][from]: one dedicated channel per
    // ordered pair, so per-peer FIFO order is preserved independently of
    // traffic between other pairs.
    let mut send_to: Vec<Vec<Sender<(i32, Vec<Edge>)>>> = (0..size).map(|_| Vec::new()).collect();
    let mut recv_from: Vec<Vec<Receiver<(i32, Vec<Edge>)>>> =
        (0..size).map(|_| Vec::new()).collect();

    for from in 0..size {
        for _to in 0..size {
            let (tx, rx) = mpsc::channel();
            send_to[from].push(tx);
            recv_from[_to].push(rx);
        }
    }

    let (candidate_tx, candidate_rx) = mpsc::channel::<(usize, Candidate)>();
    let mut candidate_rx = Some(candidate_rx);

    let mut bcast_tx = Vec::with_capacity(size);
    let mut bcast_rx_per_rank: Vec<Option<Receiver<i64>>> = Vec::with_capacity(size);
    for _ in 0..size {
        let (tx, rx) = mpsc::channel::<i64>();
        bcast_tx.push(tx);
        bcast_rx_per_rank.push(Some(rx));
    }

    let mut recv_from_iter = recv_from.into_iter();
    (0..size)
        .map(|rank| LoopbackGroup {
            rank,
            size,
            send_to: send_to[rank].clone(),
            recv_from: recv_from_iter
                .next()
                .expect("one recv_from row was built per rank"),
            candidate_tx: candidate_tx.clone(),
            candidate_rx: if rank == 0 { candidate_rx.take() } else { None },
            bcast_tx: bcast_tx.clone(),
            bcast_rx: bcast_rx_per_rank[rank].take(),
        })
        .collect()
}

impl ProcessGroup for LoopbackGroup {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send_edges(&self, to: usize, tag: i32, edges: &[Edge]) {
        self.send_to[to]
            .send((tag, edges.to_vec()))
            .expect("loopback peer rank must still be alive");
    }

    fn receive_edges(&self, from: usize, _tag: i32) -> Vec<Edge> {
        let (_tag, edges) = self.recv_from[from]
            .recv()
            .expect("loopback peer rank must still be sending");
        edges
    }

    fn gather_candidates(&self, candidate: Candidate) -> Option<Vec<Candidate>> {
        self.candidate_tx
            .send((self.rank, candidate))
            .expect("candidate gather channel must still be open");

        let receiver = self.candidate_rx.as_ref()?;
        let mut collected = vec![Candidate::none(); self.size];
        for _ in 0..self.size {
            let (rank, candidate) = receiver
                .recv()
                .expect("every rank must contribute a gather candidate");
            collected[rank] = candidate;
        }
        Some(collected)
    }

    fn broadcast_vertex(&self, value: &mut i64) {
        if self.rank == 0 {
            for (rank, tx) in self.bcast_tx.iter().enumerate() {
                if rank != 0 {
                    tx.send(*value)
                        .expect("loopback broadcast peer must still be alive");
                }
            }
        } else if let Some(receiver) = self.bcast_rx.as_ref() {
            *value = receiver.recv().expect("rank 0 must still be broadcasting");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn point_to_point_edges_round_trip() {
        let groups = build_loopback_group(2);
        thread::scope(|scope| {
            let mut groups = groups;
            let second = groups.pop().expect("two groups");
            let first = groups.pop().expect("two groups");

            scope.spawn(move || {
                first.send_edges(1, 0, &[Edge::new(0, 1, 7)]);
            });
            scope.spawn(move || {
                let edges = second.receive_edges(0, 0);
                assert_eq!(edges, vec![Edge::new(0, 1, 7)]);
            });
        });
    }

    #[test]
    fn broadcast_reaches_every_rank() {
        let groups = build_loopback_group(3);
        thread::scope(|scope| {
            for (rank, group) in groups.into_iter().enumerate() {
                scope.spawn(move || {
                    let mut value = if rank == 0 { 42 } else { -1 };
                    group.broadcast_vertex(&mut value);
                    assert_eq!(value, 42);
                });
            }
        });
    }
}
