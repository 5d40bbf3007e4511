mod test {
    use crate::prelude::*;
    use crate::tests::test_resource;

    #[test]
    fn igu21906_gps() {
        let path = test_resource("CLK", "igu21906_00.clk");
        let clkdata = parse_clockfile(&path, "gps").unwrap();
        assert_eq!(clkdata.max_satellites(), 32);

        let t0 = Epoch::from_gregorian_utc(2022, 6, 1, 0, 0, 0, 0);
        let t1 = Epoch::from_gregorian_utc(2022, 6, 1, 0, 5, 0, 0);

        let g01 = &clkdata[1];
        assert_eq!(g01.constellation, Constellation::GPS);
        assert_eq!(g01.utc_time, vec![t0, t1]);
        assert_eq!(g01.gpst_millis, vec![1_338_076_800_000, 1_338_077_100_000]);
        assert_eq!(g01.clock_bias_s, vec![4.567890123456E-04, 4.567891E-04]);
        assert_eq!(g01.gpst_millis[0], epoch_to_gpst_millis(t0, false));

        let g02 = &clkdata[2];
        assert_eq!(g02.len(), 1);
        assert_eq!(g02.clock_bias_s, vec![-2.345678901234E-05]);

        // slot 0 is a placeholder, never populated
        assert!(clkdata[0].is_empty());
        // AR (receiver) records and other fleets do not leak in
        for prn in 3..=32 {
            assert!(clkdata[prn].is_empty(), "unexpected data for G{:02}", prn);
        }
    }

    #[test]
    fn igu21906_interleaved_fleets() {
        let path = test_resource("CLK", "igu21906_00.clk");

        let clkdata = parse_clockfile(&path, "galileo").unwrap();
        let e05 = &clkdata[5];
        assert_eq!(e05.constellation, Constellation::Galileo);
        assert_eq!(e05.len(), 2);
        assert_eq!(e05.clock_bias_s, vec![-9.876543210000E-05, -9.8765E-05]);

        let clkdata = parse_clockfile(&path, "glonass").unwrap();
        let r07 = &clkdata[7];
        assert_eq!(r07.len(), 1);
        assert_eq!(r07.clock_bias_s, vec![1.111111111111E-05]);

        let clkdata = parse_clockfile(&path, "beidou").unwrap();
        let c12 = &clkdata[12];
        assert_eq!(c12.len(), 1);
        assert_eq!(c12.clock_bias_s, vec![7.777777777E-06]);
    }

    #[test]
    fn igu21906_empty_fleet() {
        let path = test_resource("CLK", "igu21906_00.clk");
        let clkdata = parse_clockfile(&path, "qzss").unwrap();
        assert_eq!(clkdata.unpopulated_prns(), vec![1, 2, 3]);
    }

    #[test]
    fn parsing_is_deterministic() {
        let path = test_resource("CLK", "igu21906_00.clk");
        let first = parse_clockfile(&path, "gps").unwrap();
        let second = parse_clockfile(&path, "gps").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_fleet_fails_before_io() {
        let err = parse_clockfile("/tmp/does-not-exist.clk", "mars").unwrap_err();
        assert!(matches!(err, Error::UnsupportedConstellation(_)));
    }

    #[test]
    fn missing_file() {
        let path = test_resource("CLK", "does-not-exist.clk");
        let err = parse_clockfile(&path, "gps").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn missing_end_of_header() {
        let path = test_resource("CLK", "missing_end_of_header.clk");
        let err = parse_clockfile(&path, "gps").unwrap_err();
        assert!(matches!(
            err,
            Error::Parsing(ParsingError::MissingHeaderMarker("END OF HEADER"))
        ));
    }

    #[test]
    fn missing_soln_sats_marker() {
        let path = test_resource("CLK", "missing_soln_sats.clk");
        let err = parse_clockfile(&path, "gps").unwrap_err();
        assert!(matches!(
            err,
            Error::Parsing(ParsingError::MissingHeaderMarker("OF SOLN SATS"))
        ));
    }
}
