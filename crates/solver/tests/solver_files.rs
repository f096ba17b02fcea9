//! Integration tests against reference solver output

use iqtools_solver::{
    read_hist, read_kernel, read_vrtx_with, Error, PairOrder, SolverFile, SolverOutput,
};
use num_complex::Complex64;
use rstest::{fixture, rstest};

#[fixture]
fn output() -> SolverOutput {
    SolverOutput::new("./data")
}

#[fixture]
fn malformed() -> SolverOutput {
    SolverOutput::new("./data/malformed")
}

/// Every off-diagonal entry must be left at zero
fn assert_diagonal<T>(values: &ndarray::Array3<T>)
where
    T: PartialEq + Default + std::fmt::Debug,
{
    for ((_, a, b), value) in values.indexed_iter() {
        if a != b {
            assert_eq!(*value, T::default());
        }
    }
}

#[rstest]
fn green(output: SolverOutput) {
    let green = output.green(2, 4).unwrap();
    assert_eq!(green.tmesh, vec![0.0, 3.33333333, 6.66666667, 10.0]);
    assert_eq!(green.number_of_points(), 4);
    assert_eq!(green.number_of_orbitals(), 2);
    assert_eq!(green.values[[0, 0, 0]], -0.5);
    assert_eq!(green.values[[0, 1, 1]], -0.45);
    assert_diagonal(&green.values);
}

#[rstest]
fn green_bin(output: SolverOutput) {
    let green = output.green_bin(10, 2, 4).unwrap();
    assert_eq!(green.values[[0, 0, 0]], -0.55);
    assert_eq!(green.values[[0, 1, 1]], -0.495);
    assert_eq!(green.values[[3, 0, 0]], -0.07443441);
}

#[rstest]
fn weiss_with_two_bands(output: SolverOutput) {
    let weiss = output.weiss(4, 4).unwrap();
    assert_eq!(weiss.values[[0, 0, 0]], -0.45);
    assert_eq!(weiss.values[[0, 2, 2]], -0.405);
    assert_eq!(weiss.values[[0, 1, 1]], -0.36);
    assert_eq!(weiss.values[[0, 3, 3]], -0.315);
    assert_diagonal(&weiss.values);
}

#[rstest]
fn hybri(output: SolverOutput) {
    let hybri = output.hybri(2, 4).unwrap();
    assert_eq!(hybri.tmesh.len(), 4);
    assert_eq!(hybri.tmesh[3], 10.0);
    assert_diagonal(&hybri.values);
}

#[rstest]
fn grn(output: SolverOutput) {
    let grn = output.grn(2, 3).unwrap();
    assert_eq!(grn.rmesh, vec![0.31415927, 0.94247780, 1.57079633]);
    assert_eq!(
        grn.values[[0, 0, 0]],
        Complex64::new(0.91016984, -0.28593829)
    );
    assert_eq!(
        grn.values[[2, 1, 1]],
        Complex64::new(0.25956040, -0.40771652)
    );
    assert_diagonal(&grn.values);
}

#[rstest]
fn sgm(output: SolverOutput) {
    let sgm = output.sgm(2, 3).unwrap();
    assert_eq!(
        sgm.values[[1, 0, 0]],
        Complex64::new(1.05917371, -0.99824770)
    );
    assert_eq!(sgm.values[[0, 0, 1]], Complex64::new(0.0, 0.0));
}

#[rstest]
fn wss(output: SolverOutput) {
    let wss = output.wss(2, 3).unwrap();
    assert_eq!(wss.number_of_points(), 3);
    assert_diagonal(&wss.values);
}

#[rstest]
fn hyb_with_two_bands(output: SolverOutput) {
    let hyb = output.hyb(4, 3).unwrap();
    assert_eq!(
        hyb.values[[0, 1, 1]],
        Complex64::new(0.36406794, -0.05718766)
    );
    assert_eq!(
        hyb.values[[0, 3, 3]],
        Complex64::new(0.32766114, -0.05146889)
    );
    assert_eq!(hyb.diagonal(2).unwrap()[2], Complex64::new(0.05191208, -0.08154330));
    assert!(hyb.diagonal(4).is_none());
}

#[rstest]
fn hub(output: SolverOutput) {
    let hub = output.hub(2, 3).unwrap();
    assert_eq!(hub.rmesh.len(), 3);
    assert_eq!(hub.ghub[[0, 0, 0]], Complex64::new(0.0, -3.18309886));
    assert_eq!(hub.shub[[2, 0, 0]], Complex64::new(1.5, -0.1));
    assert_eq!(hub.shub[[2, 1, 1]], Complex64::new(2.5, -0.2));
    assert_diagonal(&hub.ghub);
    assert_diagonal(&hub.shub);
}

#[rstest]
fn hist(output: SolverOutput) {
    assert_eq!(output.hist(3).unwrap(), vec![5.0, 7.0, 9.0]);
    assert_eq!(output.hist(2).unwrap(), vec![5.0, 7.0]);
}

#[rstest]
#[case(0, None)] // case 1
#[case(2, Some(vec![0.4, 0.6]))] // case 2
fn prob(output: SolverOutput, #[case] nsect: usize, #[case] sprob: Option<Vec<f64>>) {
    let prob = output.prob(4, nsect).unwrap();
    assert_eq!(prob.prob, vec![0.1, 0.3, 0.3, 0.3]);
    assert_eq!(prob.sprob, sprob);
}

#[rstest]
fn nmat(output: SolverOutput) {
    let nmat = output.nmat(2).unwrap();
    assert_eq!(nmat.nmat, vec![0.45, 0.55]);
    assert!((nmat.total() - 1.0).abs() < 1e-12);
    assert_eq!(nmat.nnmat[[0, 0]], 0.45);
    assert_eq!(nmat.nnmat[[0, 1]], 0.05);
    assert_eq!(nmat.nnmat[[1, 0]], 0.05);
    assert_eq!(nmat.nnmat[[1, 1]], 0.55);
}

#[rstest]
fn schi(output: SolverOutput) {
    let schi = output.schi(1, 4).unwrap();
    assert_eq!(schi.tmesh[1], 3.33333333);
    assert_eq!(schi.schi, vec![0.5, 0.017837, 0.00063632, 0.0000227]);
    assert_eq!(schi.sschi.dim(), (4, 1));
    assert_eq!(schi.sschi[[1, 0]], 0.0089185);
}

#[rstest]
fn ochi(output: SolverOutput) {
    let ochi = output.ochi(2, 3).unwrap();
    assert_eq!(ochi.tmesh, vec![0.0, 5.0, 10.0]);
    assert_eq!(ochi.ochi, vec![1.0, 0.9, 0.8]);

    // block (i, j) lands at [k, j, i]
    assert_eq!(ochi.oochi[[0, 1, 0]], 12.0);
    assert_eq!(ochi.oochi[[2, 1, 0]], 12.2);
    assert_eq!(ochi.oochi[[1, 0, 1]], 21.1);
    assert_eq!(ochi.oochi[[2, 1, 1]], 22.2);
}

#[rstest]
fn twop(output: SolverOutput) {
    let twop = output.twop(2, 2, 1).unwrap();
    assert_eq!(twop.dimensions(), (2, 1, 2));

    // second line of the first block is (j = 0, i = 1)
    assert_eq!(twop.g2[[1, 0, 0, 0, 0]], Complex64::new(1.121, -1.121));
    assert_eq!(twop.f2[[0, 0, 0, 0, 0]], Complex64::new(2.222, -2.222));

    // block (2, 1) is read last and overwrites the mirror of (1, 2)
    assert_eq!(twop.g2[[0, 0, 0, 0, 1]], Complex64::new(2.111, -2.111));
    assert_eq!(twop.g2[[0, 0, 0, 1, 0]], Complex64::new(2.111, -2.111));
}

#[rstest]
fn vrtx_lower_triangle(output: SolverOutput) {
    let vrtx = output.vrtx_with(2, 2, 1, PairOrder::LowerTriangle).unwrap();
    assert_eq!(vrtx.g2[[0, 0, 0, 0, 1]], Complex64::new(2.111, -2.111));
    assert_eq!(vrtx.g2[[0, 0, 0, 1, 0]], Complex64::new(2.111, -2.111));
    assert_eq!(vrtx.f2[[1, 1, 0, 1, 1]], Complex64::new(4.444, -4.444));

    for ((i, j, k, m, n), value) in vrtx.g2.indexed_iter() {
        assert_eq!(*value, vrtx.g2[[i, j, k, n, m]]);
    }
    for ((i, j, k, m, n), value) in vrtx.f2.indexed_iter() {
        assert_eq!(*value, vrtx.f2[[i, j, k, n, m]]);
    }
}

#[rstest]
fn vrtx_full_order_runs_out_of_lines(output: SolverOutput) {
    // the lower triangle file is one block short of a full listing
    assert!(matches!(
        output.vrtx(2, 2, 1),
        Err(Error::UnexpectedEndOfFile { .. })
    ));
}

#[rstest]
fn kernel() {
    let kernel = read_kernel("./data/solver.kernel.dat", 2).unwrap();
    assert_eq!(kernel.tmesh, vec![0.0, 1.0]);
    assert_eq!(kernel.ktau, vec![0.1, 0.3]);
    assert_eq!(kernel.ptau, vec![0.2, 0.4]);
}

#[rstest]
fn reading_is_deterministic(output: SolverOutput) {
    assert_eq!(output.grn(2, 3).unwrap(), output.grn(2, 3).unwrap());
    assert_eq!(output.twop(2, 2, 1).unwrap(), output.twop(2, 2, 1).unwrap());
    assert_eq!(output.ochi(2, 3).unwrap(), output.ochi(2, 3).unwrap());
}

#[rstest]
fn explicit_path_matches_default_name(output: SolverOutput) {
    let explicit = read_hist("./data/solver.hist.dat", 3).unwrap();
    assert_eq!(explicit, output.hist(3).unwrap());

    let explicit =
        read_vrtx_with("./data/solver.vrtx.dat", 2, 2, 1, PairOrder::LowerTriangle).unwrap();
    assert_eq!(
        explicit,
        output.vrtx_with(2, 2, 1, PairOrder::LowerTriangle).unwrap()
    );
}

#[rstest]
fn malformed_hist(malformed: SolverOutput) {
    assert!(matches!(
        malformed.hist(3),
        Err(Error::MissingField {
            line: 3,
            column: 2,
            ..
        })
    ));
}

#[rstest]
fn malformed_kernel(malformed: SolverOutput) {
    match malformed.kernel(2) {
        Err(Error::InvalidNumber {
            line,
            column,
            token,
        }) => {
            assert_eq!(line, 2);
            assert_eq!(column, 2);
            assert_eq!(token, "abc");
        }
        other => panic!("expected an invalid number, found {other:?}"),
    }
}

#[rstest]
fn truncated_grn(malformed: SolverOutput) {
    assert!(matches!(
        malformed.grn(2, 3),
        Err(Error::UnexpectedEndOfFile { .. })
    ));
}

#[rstest]
fn missing_file() {
    let output = SolverOutput::new("./data/does_not_exist");
    match output.nmat(2) {
        Err(Error::FileNotFound(path)) => {
            assert_eq!(path, output.path(SolverFile::Nmat));
        }
        other => panic!("expected a missing file, found {other:?}"),
    }
}

#[rstest]
fn serialize_to_json(output: SolverOutput) {
    let kernel = output.kernel(2).unwrap();
    let json = serde_json::to_value(&kernel).unwrap();
    assert_eq!(json["tmesh"], serde_json::json!([0.0, 1.0]));
    assert_eq!(json["ktau"], serde_json::json!([0.1, 0.3]));

    let nmat = output.nmat(2).unwrap();
    let json = serde_json::to_string(&nmat).unwrap();
    assert!(json.contains("\"nmat\":[0.45,0.55]"));
}

#[rstest]
fn display(output: SolverOutput) {
    let prob = output.prob(4, 2).unwrap();
    let text = prob.to_string();
    assert!(text.starts_with("Probability {"));
    assert!(text.contains("configurations: 4"));
    assert!(text.contains("sectors: 2"));

    let nmat = output.nmat(2).unwrap();
    assert!(nmat.to_string().contains("orbitals: 2"));

    let grn = output.grn(2, 3).unwrap().to_string();
    assert!(grn.contains("rmesh: 3 points, 3.14159e-01 to 1.57080e+00"));
    assert!(grn.contains("lowest frequency: 9.10170e-01-2.85938e-01i"));
}
