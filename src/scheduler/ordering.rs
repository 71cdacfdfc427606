//! Burst ordering for non-preemptive SJF.

use crate::models::Job;

/// Sorts jobs by ascending burst, keeping equal bursts in input order.
///
/// # Algorithm
/// Bubble sort that swaps neighbours only when the left burst is strictly
/// greater, so equal bursts never cross each other.
///
/// # Complexity
/// O(n²) comparisons.
pub fn sort_by_burst(jobs: &mut [Job]) {
    let n = jobs.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if jobs[j].burst > jobs[j + 1].burst {
                jobs.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
