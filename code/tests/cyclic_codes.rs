use ctk_code::{
    Code, CodeError, CodeKind, ConstructionConfig, CyclicCode, ErrorKind, LinearCode,
    SystematicCode,
};
use ctk_coset::{CosetError, all_cyclotomic_cosets, defining_set, flatten};
use ctk_field::{FieldError, GaloisField, GfElement};
use ctk_field_testing::random_element;
use ctk_matrix::Matrix;
use ctk_matrix::linalg::{first_non_orthogonal_pair, rank};
use ctk_poly::{Polynomial, PolynomialRing};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn bits(field: &GaloisField, values: &[u32]) -> Vec<GfElement> {
    values.iter().map(|&v| field.element(v)).collect()
}

/// Everything a constructed code promises about itself.
fn check_invariants(code: &CyclicCode) {
    let n = code.length();
    let k = code.dimension();
    let ring = code.ring();

    assert_eq!(k, n - code.defining_set().len());
    assert_eq!(
        ring.mul(code.generator_polynomial(), code.parity_check_polynomial()),
        ring.x_pow_n_minus_one(n)
    );

    let x_n = ring.x_pow_n_minus_one(n);
    let e = code.idempotent();
    assert_eq!(&ring.mul_mod(e, e, &x_n).unwrap(), e);

    let g = code.generator_matrix();
    let h = code.parity_check_matrix();
    assert_eq!(g.dimensions(), (k, n));
    assert_eq!(h.dimensions(), (n - k, n));
    assert_eq!(first_non_orthogonal_pair(code.field(), g, h).unwrap(), None);
    assert_eq!(rank(code.field(), g), k);
    assert!(code.permutation().is_none());

    let (lower, upper) = code.minimum_distance_bounds();
    assert!(lower <= upper, "{code}: {lower} > {upper}");
    assert!(code.bound().certified() <= code.upper_bound());

    let rebuilt = CyclicCode::from_generator_polynomial(
        code.field().order() as u64,
        n,
        code.base_generator_polynomial(),
    )
    .unwrap();
    assert_eq!(rebuilt.defining_set(), code.defining_set());
}

#[test]
fn test_binary_bch_15_5_7() {
    let code = CyclicCode::bch(2, 15, 4, 3).unwrap();
    check_invariants(&code);

    assert_eq!(code.kind(), CodeKind::Bch);
    assert_eq!(code.dimension(), 5);
    assert_eq!(code.defining_set(), &[1, 2, 3, 4, 5, 6, 8, 9, 10, 12]);
    assert_eq!(code.representatives(), &[3, 1, 5]);
    // The estimator finds the longer run 1..=6.
    assert_eq!((code.design_distance(), code.offset()), (7, 1));
    assert_eq!(code.minimum_distance(), Some(7));

    let gf2 = code.field().clone();
    let ring = PolynomialRing::new(gf2);
    assert_eq!(
        code.base_generator_polynomial(),
        &ring.poly(&[1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1])
    );
    assert_eq!(code.to_string(), "[15, 5, 7] BCH code over GF(2)");
}

#[test]
fn test_reed_solomon_gf8() {
    let code = CyclicCode::reed_solomon(8, 3, 0).unwrap();
    check_invariants(&code);
    assert_eq!(code.kind(), CodeKind::ReedSolomon);
    assert_eq!((code.length(), code.dimension()), (7, 5));
    assert_eq!(code.minimum_distance(), Some(3));
    assert_eq!(code.splitting_field().degree(), 1);
    assert!(code.is_narrow_sense());
}

#[test]
fn test_reed_solomon_gf13() {
    let code = CyclicCode::reed_solomon(13, 5, 1).unwrap();
    check_invariants(&code);
    assert_eq!(code.kind(), CodeKind::ReedSolomon);
    assert_eq!((code.length(), code.dimension()), (12, 8));
    assert_eq!(code.minimum_distance(), Some(5));
    assert_eq!(code.minimum_distance_bounds(), (5, 5));
    assert_eq!(code.defining_set(), &[1, 2, 3, 4]);
}

#[test]
fn test_quadratic_residue_code_47() {
    // x^47 - 1 splits over GF(2^23), beyond the log/exp table limit.
    let code = CyclicCode::new(2, 47, &[1]).unwrap();
    assert!(!code.splitting_field().ext().has_tables());
    assert_eq!(code.splitting_field().ext().order(), 1 << 23);
    check_invariants(&code);

    assert_eq!((code.length(), code.dimension()), (47, 24));
    let residues: Vec<usize> = {
        let mut squares: Vec<usize> = (1..47).map(|i| i * i % 47).collect();
        squares.sort_unstable();
        squares.dedup();
        squares
    };
    assert_eq!(code.defining_set(), residues.as_slice());
    assert_eq!(code.base_generator_polynomial().degree(), Some(23));
    // -1 is a non-residue mod 47.
    assert!(!code.is_reversible());

    let gf2 = code.field().clone();
    let mut rng = SmallRng::seed_from_u64(47);
    let message: Vec<GfElement> = (0..24).map(|_| random_element(&gf2, &mut rng)).collect();
    let codeword = code.encode(&message).unwrap();
    assert!(code.is_codeword(&codeword).unwrap());
}

#[test]
fn test_offset_reduced_mod_length() {
    let code = CyclicCode::bch(2, 15, 4, usize::MAX).unwrap();
    // usize::MAX is divisible by 15, so the seeds are {0, 1, 2}.
    assert_eq!(code.defining_set(), &[0, 1, 2, 4, 8]);
    assert!(code.offset() < 15);
    assert_eq!(
        code.base_generator_polynomial(),
        CyclicCode::bch(2, 15, 4, 0).unwrap().base_generator_polynomial()
    );

    let rs = CyclicCode::reed_solomon(8, 3, 7 * 1000 + 2).unwrap();
    assert_eq!(rs.defining_set(), &[2, 3]);
    assert_eq!(rs.offset(), 2);
}

#[test]
fn test_design_distance_one_rejected() {
    let err = CyclicCode::bch(2, 15, 1, 0).unwrap_err();
    assert_eq!(err, CodeError::InvalidDesignDistance { delta: 1, n: 15 });
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn test_domain_errors() {
    let err = CyclicCode::new(6, 5, &[1]).unwrap_err();
    assert_eq!(err, CodeError::Field(FieldError::NotPrimePower(6)));
    assert_eq!(err.kind(), ErrorKind::Domain);

    let err = CyclicCode::new(2, 6, &[1]).unwrap_err();
    assert_eq!(err, CodeError::Coset(CosetError::NotCoprime { q: 2, n: 6 }));
    assert_eq!(err.kind(), ErrorKind::Domain);

    let err = CyclicCode::new(2, 15, &[0, 1, 3, 5, 7]).unwrap_err();
    assert_eq!(err, CodeError::TrivialCode { n: 15 });
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn test_generator_polynomial_errors() {
    let gf2 = GaloisField::new(2).unwrap();
    let ring = PolynomialRing::new(gf2);

    // (x + 1)^2 is not squarefree, so it cannot divide x^7 - 1.
    let err = CyclicCode::from_generator_polynomial(2, 7, &ring.poly(&[1, 0, 1])).unwrap_err();
    assert_eq!(err, CodeError::GeneratorDoesNotDivide { n: 7 });
    assert_eq!(err.kind(), ErrorKind::Construction);

    let gf4 = GaloisField::new(4).unwrap();
    let outside = Polynomial::from_coeffs(vec![gf4.element(2), GfElement::ONE]);
    let err = CyclicCode::from_generator_polynomial(2, 7, &outside).unwrap_err();
    assert_eq!(err, CodeError::NotOverBaseField);
}

#[test]
fn test_coset_partition() {
    for (q, n) in [(2, 15), (2, 23), (3, 13), (4, 21), (5, 24)] {
        let cosets = all_cyclotomic_cosets(q, n).unwrap();
        let total: usize = cosets.iter().map(Vec::len).sum();
        assert_eq!(total, n);
        assert_eq!(flatten(&cosets), (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn test_invariants_across_fields() {
    let codes = [
        CyclicCode::new(2, 23, &[1]).unwrap(),
        CyclicCode::new(3, 11, &[1]).unwrap(),
        CyclicCode::new(4, 21, &[1, 7]).unwrap(),
        CyclicCode::bch(3, 26, 4, 0).unwrap(),
        CyclicCode::bch(2, 31, 5, 1).unwrap(),
        CyclicCode::reed_solomon(16, 6, 2).unwrap(),
    ];
    for code in &codes {
        check_invariants(code);
    }
    // The binary Golay code.
    assert_eq!(codes[0].dimension(), 12);
    // The ternary Golay code.
    assert_eq!(codes[1].dimension(), 6);
}

#[test]
fn test_hartmann_tzeng_refinement() {
    let seeds = [1, 2, 5, 6, 9, 10];
    let plain = CyclicCode::new(16, 15, &seeds).unwrap();
    assert_eq!(plain.hartmann_tzeng_bound(), 3);

    let refined =
        CyclicCode::new_with_config(16, 15, &seeds, ConstructionConfig::thorough()).unwrap();
    check_invariants(&refined);
    assert_eq!(refined.kind(), CodeKind::Cyclic);
    assert_eq!(refined.design_distance(), 3);
    assert_eq!(refined.hartmann_tzeng_bound(), 5);
    assert!(refined.lower_bound() >= 5);
}

#[test]
fn test_generator_round_trip_recovers_bch() {
    let gf2 = GaloisField::new(2).unwrap();
    let ring = PolynomialRing::new(gf2);
    let g = ring.poly(&[1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1]);
    let code = CyclicCode::from_generator_polynomial(2, 15, &g).unwrap();
    assert_eq!(code.kind(), CodeKind::Bch);
    assert_eq!(
        code.defining_set(),
        defining_set(&[1, 3, 5], 2, 15).unwrap().as_slice()
    );
}

#[test]
fn test_encode_and_syndrome() {
    let code = CyclicCode::new(2, 7, &[1]).unwrap();
    let gf2 = code.field().clone();

    let message = bits(&gf2, &[1, 0, 1, 1]);
    let codeword = code.encode(&message).unwrap();
    assert!(code.is_codeword(&codeword).unwrap());

    let mut corrupted = codeword.clone();
    corrupted[2] = gf2.add(corrupted[2], GfElement::ONE);
    assert!(!code.is_codeword(&corrupted).unwrap());
    assert_eq!(code.syndrome(&corrupted).unwrap().len(), 3);

    let systematic = code.encode_systematic(&message).unwrap();
    assert_eq!(&systematic[..4], message.as_slice());
    assert!(code.is_codeword(&systematic).unwrap());
    assert_eq!(code.parity_len(), 3);

    let ring = PolynomialRing::new(gf2.clone());
    let c = code.encode_polynomial(&ring.poly(&[1, 1])).unwrap();
    assert_eq!(
        c.to_padded_coeffs(7),
        code.encode(&bits(&gf2, &[1, 1, 0, 0])).unwrap()
    );

    let err = code.encode(&message[..3]).unwrap_err();
    assert_eq!(
        err,
        CodeError::LengthMismatch {
            expected: 4,
            found: 3
        }
    );
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(code.encode_polynomial(&Polynomial::monomial(4)).is_err());
}

#[test]
fn test_full_space_code() {
    let code = CyclicCode::new(2, 7, &[]).unwrap();
    check_invariants(&code);
    assert_eq!((code.message_len(), code.codeword_len()), (7, 7));
    assert!(code.generator_polynomial().is_one());
    assert_eq!(code.parity_check_matrix().height(), 0);
    assert!(code.syndrome(&bits(&code.field().clone(), &[1; 7])).unwrap().is_empty());
}

#[test]
fn test_dual_and_complement() {
    let hamming = CyclicCode::new(2, 7, &[1]).unwrap();

    let dual = hamming.dual().unwrap();
    check_invariants(&dual);
    assert_eq!(dual.dimension(), 3);
    assert_eq!(dual.defining_set(), &[0, 1, 2, 4]);
    assert_eq!(dual.dual().unwrap().defining_set(), hamming.defining_set());

    let complement = hamming.complement().unwrap();
    assert_eq!(complement.defining_set(), &[0, 3, 5, 6]);
    assert_eq!(complement.dimension(), 3);

    let nonzeros = hamming.nonzeros();
    let zeros = hamming.zeros();
    assert_eq!(zeros.len() + nonzeros.len(), 7);
    let ring = hamming.ring();
    assert!(
        zeros
            .iter()
            .all(|&z| ring.evaluate(hamming.generator_polynomial(), z).is_zero())
    );
}

#[test]
fn test_intersection_sum_and_subcodes() {
    let hamming = CyclicCode::new(2, 7, &[1]).unwrap();
    let even = CyclicCode::new(2, 7, &[0]).unwrap();

    let meet = hamming.intersection(&even).unwrap();
    assert_eq!(meet.defining_set(), &[0, 1, 2, 4]);
    assert_eq!(meet.dimension(), 3);

    let join = hamming.sum(&even).unwrap();
    assert_eq!(join.dimension(), 7);

    assert!(meet.is_subcode_of(&hamming).unwrap());
    assert!(meet.is_subcode_of(&even).unwrap());
    assert!(!hamming.is_subcode_of(&meet).unwrap());

    let rest = hamming.subcode_complement(&meet).unwrap();
    assert_eq!(rest.dimension(), hamming.dimension() - meet.dimension());
    assert_eq!(rest.defining_set(), &[1, 2, 3, 4, 5, 6]);

    assert_eq!(
        hamming.subcode_complement(&hamming).unwrap_err(),
        CodeError::NotProperSubcode
    );
    assert_eq!(
        meet.subcode_complement(&hamming).unwrap_err(),
        CodeError::NotProperSubcode
    );
}

#[test]
fn test_mismatched_codes_rejected() {
    let hamming = CyclicCode::new(2, 7, &[1]).unwrap();

    let longer = CyclicCode::new(2, 15, &[1]).unwrap();
    let err = hamming.intersection(&longer).unwrap_err();
    assert_eq!(
        err,
        CodeError::LengthMismatch {
            expected: 7,
            found: 15
        }
    );
    assert_eq!(err.kind(), ErrorKind::Argument);

    let quaternary = CyclicCode::new(4, 7, &[1]).unwrap();
    assert_eq!(
        hamming.sum(&quaternary).unwrap_err(),
        CodeError::FieldMismatch { left: 2, right: 4 }
    );
}

#[test]
fn test_structural_predicates() {
    let code = CyclicCode::new(2, 15, &[5]).unwrap();
    assert_eq!(code.defining_set(), &[5, 10]);
    assert!(code.is_reversible());
    assert!(code.is_primitive());
    assert!(!code.is_narrow_sense());

    let bch = CyclicCode::bch(2, 15, 4, 3).unwrap();
    assert!(!bch.is_reversible());
    assert!(!bch.is_degenerate());
}

#[test]
fn test_random_messages_encode_to_codewords() {
    let mut rng = SmallRng::seed_from_u64(3);
    for code in [
        CyclicCode::bch(3, 26, 4, 0).unwrap(),
        CyclicCode::reed_solomon(16, 6, 2).unwrap(),
    ] {
        let field = code.field().clone();
        let ring = PolynomialRing::new(field.clone());
        for _ in 0..10 {
            let message: Vec<GfElement> = (0..code.dimension())
                .map(|_| random_element(&field, &mut rng))
                .collect();
            let codeword = code.encode(&message).unwrap();
            assert!(code.is_codeword(&codeword).unwrap());
            assert!(code.is_codeword(&code.encode_systematic(&message).unwrap()).unwrap());

            let c = code
                .encode_polynomial(&Polynomial::from_coeffs(message.clone()))
                .unwrap();
            assert_eq!(c.to_padded_coeffs(code.length()), codeword);
            assert!(ring.divides(code.base_generator_polynomial(), &c));
        }
    }
}
