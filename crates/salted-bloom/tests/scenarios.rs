//! End-to-end usage scenarios

use std::collections::HashSet;

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use salted_bloom::{calculate_fpr, BloomFilter};

fn random_strings(rng: &mut StdRng, count: usize, exclude: &HashSet<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let s: String = (0..16).map(|_| rng.sample(Alphanumeric) as char).collect();
        if !exclude.contains(&s) {
            out.push(s);
        }
    }
    out
}

#[test]
fn alpha_beta_clear_scenario() {
    let mut filter = BloomFilter::new(100, 4).unwrap();
    filter.add_str("alpha");

    assert!(filter.test_str("alpha"));
    assert!(!filter.test_str("beta"));

    filter.clear_all();
    assert!(!filter.test_str("alpha"));
}

#[test]
fn false_positive_rate_stays_near_theoretical_estimate() {
    let (m, k, n) = (1000, 5, 50);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut filter = BloomFilter::new(m, k).unwrap();

    let inserted: HashSet<String> = random_strings(&mut rng, n, &HashSet::new())
        .into_iter()
        .collect();
    assert_eq!(inserted.len(), n);
    for entry in &inserted {
        filter.add_str(entry);
    }

    for entry in &inserted {
        assert!(filter.test_str(entry), "False negative for {}", entry);
    }

    let probes = random_strings(&mut rng, 10_000, &inserted);
    let false_positives = probes.iter().filter(|p| filter.test_str(p)).count();
    let observed = false_positives as f64 / probes.len() as f64;

    // Theoretical (1 - e^(-kn/m))^k ≈ 0.00053; allow generous sampling slack
    let expected = calculate_fpr(m, n, k);
    assert!(
        observed <= expected * 10.0,
        "Observed FPR {} far above theoretical {}",
        observed,
        expected
    );
}

#[test]
fn test_and_add_deduplicates_a_stream() {
    let mut filter = BloomFilter::with_capacity(1000, 0.001).unwrap();
    let stream: Vec<String> = (0..2000).map(|i| format!("event_{}", i % 500)).collect();

    let mut first_seen = 0;
    for event in &stream {
        if !filter.test_and_add_str(event) {
            first_seen += 1;
        }
    }

    // Repeats are always caught; false positives can only lower the count
    assert!(first_seen <= 500);
    assert!(first_seen >= 490, "Too many false positives: {}", first_seen);
}

#[test]
fn filter_behind_a_lock_is_shareable() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let filter = Arc::new(Mutex::new(BloomFilter::new(8192, 4).unwrap()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || {
                for i in 0..100 {
                    let item = format!("thread_{}_{}", t, i);
                    filter.lock().unwrap().add_str(&item);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let filter = filter.lock().unwrap();
    for t in 0..4 {
        for i in 0..100 {
            assert!(filter.test_str(&format!("thread_{}_{}", t, i)));
        }
    }
}
