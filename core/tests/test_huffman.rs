// Tree construction, code assignment and symbol transcoding.

#[cfg(test)]
mod tests {
    use huffpack_core::bitio::{BitBuffer, BitIoError, BitSink};
    use huffpack_core::frequency::FrequencyTable;
    use huffpack_core::huffman::{Code, HuffmanError, HuffmanTree};
    use proptest::prelude::*;

    fn code_str(tree: &HuffmanTree, symbol: u8) -> String {
        tree.code(symbol).expect("symbol present").to_string()
    }

    /// Cost of an optimal prefix code, by repeatedly merging the two
    /// lightest weights of a sorted list.
    fn optimal_cost(table: &FrequencyTable) -> u64 {
        let mut weights: Vec<u64> = table.present().map(|(_, c)| c).collect();
        let mut cost = 0;
        while weights.len() > 1 {
            weights.sort_unstable_by(|a, b| b.cmp(a));
            let a = weights.pop().unwrap();
            let b = weights.pop().unwrap();
            cost += a + b;
            weights.push(a + b);
        }
        cost
    }

    fn assert_prefix_free(tree: &HuffmanTree) {
        let codes: Vec<Code> = tree.symbols().filter_map(|s| tree.code(s)).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn two_equal_symbols_lower_symbol_gets_zero() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"ab"));
        assert_eq!(code_str(&tree, b'a'), "0");
        assert_eq!(code_str(&tree, b'b'), "1");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn three_equal_symbols_tie_break() {
        // a and b merge first; c (weight 1) then pops before the weight-2 node.
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"abc"));
        assert_eq!(code_str(&tree, b'c'), "0");
        assert_eq!(code_str(&tree, b'a'), "10");
        assert_eq!(code_str(&tree, b'b'), "11");
    }

    #[test]
    fn heavier_symbols_get_shorter_codes() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"aaaaaaaabbbbccd"));
        let lengths = tree.code_lengths();
        assert!(lengths[b'a' as usize] <= lengths[b'b' as usize]);
        assert!(lengths[b'b' as usize] <= lengths[b'c' as usize]);
        assert!(lengths[b'c' as usize] <= lengths[b'd' as usize]);
        assert_eq!(lengths[b'z' as usize], 0);
    }

    #[test]
    fn build_is_deterministic() {
        let table = FrequencyTable::from_bytes(b"the quick brown fox jumps over the lazy dog");
        let a = HuffmanTree::build(&table);
        let b = HuffmanTree::build(&table);
        assert_eq!(a, b);
        for symbol in a.symbols() {
            assert_eq!(a.code(symbol), b.code(symbol));
        }
    }

    #[test]
    fn codes_are_prefix_free() {
        let data: Vec<u8> = (0..=255u8).flat_map(|b| std::iter::repeat(b).take(b as usize % 7 + 1)).collect();
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data));
        assert_eq!(tree.symbols().count(), 256);
        assert_prefix_free(&tree);
    }

    #[test]
    fn encoded_size_is_optimal() {
        let table = FrequencyTable::from_bytes(b"abracadabra alakazam");
        let tree = HuffmanTree::build(&table);
        assert_eq!(tree.encoded_bits(&table), optimal_cost(&table));
    }

    #[test]
    fn degenerate_tree_uses_zero_length_codes() {
        let table = FrequencyTable::from_bytes(&[b'A'; 1000]);
        let tree = HuffmanTree::build(&table);
        assert!(tree.is_degenerate());
        assert!(tree.code(b'A').unwrap().is_empty());
        assert_eq!(tree.encoded_bits(&table), 0);

        let mut sink = BitBuffer::new();
        tree.encode(b'A', &mut sink).unwrap();
        assert!(sink.is_empty());

        // Decoding consumes nothing.
        let mut source = BitBuffer::new();
        assert_eq!(tree.decode(&mut source).unwrap(), b'A');
    }

    #[test]
    fn encode_absent_symbol_fails() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"ab"));
        let mut sink = BitBuffer::new();
        let err = tree.encode(b'z', &mut sink).unwrap_err();
        assert!(matches!(err, HuffmanError::SymbolNotPresent { symbol: b'z' }));
        assert!(tree.code(b'z').is_none());
    }

    #[test]
    fn encode_then_decode_symbol_sequence() {
        let data = b"abracadabra";
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(data));
        let mut bits = BitBuffer::new();
        for &symbol in data {
            tree.encode(symbol, &mut bits).unwrap();
        }
        let decoded: Vec<u8> = data.iter().map(|_| tree.decode(&mut bits).unwrap()).collect();
        assert_eq!(&decoded, data);
        assert_eq!(bits.remaining(), 0);
    }

    #[test]
    fn decode_past_end_is_exhausted() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"ab"));
        let mut bits = BitBuffer::new();
        let err = tree.decode(&mut bits).unwrap_err();
        assert!(matches!(err, HuffmanError::BitIo(BitIoError::Exhausted)));
    }

    #[test]
    fn topology_round_trip_preserves_codes() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"she sells sea shells"));
        let mut bits = BitBuffer::new();
        tree.write_topology(&mut bits).unwrap();

        let rebuilt = HuffmanTree::read_topology(&mut bits).unwrap();
        assert_eq!(rebuilt.len(), tree.len());
        assert_eq!(rebuilt.symbols().collect::<Vec<_>>(), tree.symbols().collect::<Vec<_>>());
        for symbol in tree.symbols() {
            assert_eq!(rebuilt.code(symbol), tree.code(symbol));
        }
    }

    #[test]
    fn topology_of_degenerate_tree_is_one_leaf() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&[0x5A; 3]));
        let mut bits = BitBuffer::new();
        tree.write_topology(&mut bits).unwrap();
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.as_bytes(), &[0b1010_1101, 0b0000_0000]);
        assert!(HuffmanTree::read_topology(&mut bits).unwrap().is_degenerate());
    }

    #[test]
    fn topology_of_empty_tree_is_rejected() {
        let tree = HuffmanTree::build(&FrequencyTable::new());
        let mut bits = BitBuffer::new();
        assert!(matches!(tree.write_topology(&mut bits), Err(HuffmanError::EmptyTree)));
    }

    #[test]
    fn topology_with_duplicate_symbol_is_rejected() {
        let mut bits = BitBuffer::new();
        bits.write_bit(false).unwrap();
        bits.write_bit(true).unwrap();
        bits.write_bits(0x41, 8).unwrap();
        bits.write_bit(true).unwrap();
        bits.write_bits(0x41, 8).unwrap();
        let err = HuffmanTree::read_topology(&mut bits).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidTopology(_)));
    }

    #[test]
    fn truncated_topology_is_exhausted() {
        let mut bits = BitBuffer::new();
        bits.write_bit(false).unwrap();
        bits.write_bit(true).unwrap();
        let err = HuffmanTree::read_topology(&mut bits).unwrap_err();
        assert!(matches!(err, HuffmanError::BitIo(BitIoError::Exhausted)));
    }

    /// Exhaustive optimum: the cheapest assignment of code lengths that
    /// satisfies the Kraft inequality. Small alphabets only.
    fn brute_force_cost(weights: &[u64]) -> u64 {
        fn search(weights: &[u64], max_len: u32, kraft: u64, cost: u64, best: &mut u64) {
            let Some((&w, rest)) = weights.split_first() else {
                *best = (*best).min(cost);
                return;
            };
            for len in 1..=max_len {
                let used = kraft + (1u64 << (max_len - len));
                if used <= 1u64 << max_len {
                    search(rest, max_len, used, cost + w * u64::from(len), best);
                }
            }
        }
        let mut best = u64::MAX;
        search(weights, weights.len() as u32 - 1, 0, 0, &mut best);
        best
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force_optimum(weights in proptest::collection::vec(1u64..50, 2..=5)) {
            let mut counts = [0u64; 256];
            for (i, &w) in weights.iter().enumerate() {
                counts[i * 37] = w;
            }
            let table = FrequencyTable::from_counts(counts);
            let tree = HuffmanTree::build(&table);
            prop_assert_eq!(tree.encoded_bits(&table), brute_force_cost(&weights));
        }

        #[test]
        fn prop_codes_optimal_and_prefix_free(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
            let table = FrequencyTable::from_bytes(&data);
            let tree = HuffmanTree::build(&table);
            prop_assert_eq!(tree.encoded_bits(&table), optimal_cost(&table));
            assert_prefix_free(&tree);

            // Kraft equality for any tree with two or more leaves.
            if table.distinct() > 1 {
                let lengths = tree.code_lengths();
                let max = *lengths.iter().max().unwrap() as u32;
                let kraft: u128 = table
                    .present()
                    .map(|(s, _)| 1u128 << (max - lengths[s as usize] as u32))
                    .sum();
                prop_assert_eq!(kraft, 1u128 << max);
            }
        }

        #[test]
        fn prop_transcode_round_trip(data in proptest::collection::vec(any::<u8>(), 1..512)) {
            let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data));
            let mut bits = BitBuffer::new();
            for &symbol in &data {
                tree.encode(symbol, &mut bits).unwrap();
            }
            for &symbol in &data {
                prop_assert_eq!(tree.decode(&mut bits).unwrap(), symbol);
            }
        }
    }
}
