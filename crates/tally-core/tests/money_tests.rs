//! End-to-end tests for the public Money API.
//!
//! Tests cover the documented scenarios, currency enforcement across every
//! binary operation, percentage bounds, allocation, and sharing across threads.

use tally_core::{registry, Money, MoneyError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn usd(amount: i64) -> Money {
    Money::new(amount, "USD").unwrap()
}

mod scenarios {
    use super::*;

    #[test]
    fn test_add_same_currency() {
        let sum = usd(100).add(&usd(130)).unwrap();
        assert_eq!(sum.amount(), 230);
        assert_eq!(sum.currency().code(), "USD");
    }

    #[test]
    fn test_divide_rounds_to_nearest() {
        assert_eq!(usd(600).divide(21).amount(), 29);
        assert_eq!(usd(600).divide(22).amount(), 27);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(usd(9100).percentage(34).unwrap().amount(), 3094);
    }

    #[test]
    fn test_allocate_even_split_with_remainder() {
        let parts = usd(1003).allocate(&[50, 50]).unwrap();
        let amounts: Vec<i64> = parts.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![502, 501]);
    }

    #[test]
    fn test_allocate_uneven_ratios() {
        let parts = usd(100).allocate(&[1, 3]).unwrap();
        let amounts: Vec<i64> = parts.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![25, 75]);
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_half_rounds_down_to_even() {
        // 250 / 100 = 2.5 → 2
        assert_eq!(usd(250).divide(100).amount(), 2);
    }

    #[test]
    fn test_half_rounds_up_to_even() {
        // 350 / 100 = 3.5 → 4
        assert_eq!(usd(350).divide(100).amount(), 4);
    }

    #[test]
    fn test_repeated_halves_do_not_drift() {
        // 0.5, 1.5, 2.5, 3.5 → 0, 2, 2, 4: sum 8 equals the exact sum 8
        let total: i64 = [1, 3, 5, 7].iter().map(|&n| usd(n).divide(2).amount()).sum();
        assert_eq!(total, 8);
    }
}

mod currency_rules {
    use super::*;

    #[test]
    fn test_unknown_currency() {
        init_tracing();
        assert_eq!(
            Money::new(100, "USX"),
            Err(MoneyError::UnknownCurrency("USX".to_string()))
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Money::new(1, "gbp").unwrap(), Money::gbp(1));
    }

    #[test]
    fn test_every_binary_operation_checks_currency() {
        init_tracing();
        let dollars = usd(100);
        let pounds = Money::new(100, "GBP").unwrap();

        let results: Vec<Result<(), MoneyError>> = vec![
            dollars.add(&pounds).map(|_| ()),
            dollars.subtract(&pounds).map(|_| ()),
            dollars.equals(&pounds).map(|_| ()),
            dollars.greater_than(&pounds).map(|_| ()),
            dollars.greater_than_or_equal(&pounds).map(|_| ()),
            dollars.less_than(&pounds).map(|_| ()),
            dollars.less_than_or_equal(&pounds).map(|_| ()),
        ];

        for result in results {
            assert_eq!(result, Err(MoneyError::mismatch("USD", "GBP")));
        }
    }

    #[test]
    fn test_results_keep_source_currency() {
        let kwd = Money::new(10_000, "kwd").unwrap();
        let currency = registry::lookup("KWD").unwrap();

        assert_eq!(kwd.multiply(3).currency(), currency);
        assert_eq!(kwd.divide(3).currency(), currency);
        assert_eq!(kwd.percentage(10).unwrap().currency(), currency);
        for part in kwd.allocate(&[1, 2, 3]).unwrap() {
            assert_eq!(part.currency(), currency);
        }
    }
}

mod percentage_bounds {
    use super::*;

    #[test]
    fn test_out_of_range() {
        assert_eq!(usd(500).percentage(-1), Err(MoneyError::PercentageOutOfRange(-1)));
        assert_eq!(usd(500).percentage(101), Err(MoneyError::PercentageOutOfRange(101)));
    }

    #[test]
    fn test_edges() {
        assert!(usd(500).percentage(0).unwrap().is_zero());
        assert_eq!(usd(500).percentage(100).unwrap(), usd(500));
    }
}

mod allocation {
    use super::*;

    #[test]
    fn test_empty_ratio_list() {
        assert_eq!(usd(100).allocate(&[]), Err(MoneyError::EmptyRatioList));
    }

    #[test]
    fn test_conserves_total_for_many_shapes() {
        init_tracing();
        let ratio_lists: [&[i64]; 6] = [
            &[1],
            &[1, 1, 1],
            &[70, 20, 10],
            &[3, 3, 3, 3, 3, 3, 3],
            &[1, 1_000_000],
            &[33, 33, 34],
        ];

        for amount in [0, 1, 2, 99, 100, 1003, 999_999, 1_000_001] {
            for ratios in ratio_lists {
                let parts = usd(amount).allocate(ratios).unwrap();
                let total: i64 = parts.iter().map(Money::amount).sum();
                assert_eq!(total, amount, "amount {amount}, ratios {ratios:?}");
            }
        }
    }

    #[test]
    fn test_zero_decimal_currency() {
        let parts = Money::jpy(1000).allocate(&[1, 1, 1]).unwrap();
        let amounts: Vec<i64> = parts.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![334, 333, 333]);
    }
}

mod sharing {
    use super::*;

    #[test]
    fn test_values_are_shared_across_threads_without_locks() {
        let price = usd(1003);

        let totals: Vec<i64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=8)
                .map(|n| {
                    scope.spawn(move || {
                        let parts = price.allocate(&vec![1; n]).unwrap();
                        parts.iter().map(Money::amount).sum::<i64>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(totals.iter().all(|&total| total == 1003));
        assert_eq!(price.amount(), 1003);
    }
}
