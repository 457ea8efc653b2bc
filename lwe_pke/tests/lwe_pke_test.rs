use algebra::reduce::ReduceSub;
use lwe_pke::{
    Ciphertext, Engine, ErrorKind, LweSecretKeyType, PkeError, PrivateKey, PublicKey,
    DEFAULT_PARAMETERS, MIN_MODULUS, TOY_PARAMETERS,
};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;

const N: usize = 64;
const Q: u64 = 1009;

fn toy_engine() -> Engine {
    Engine::new(TOY_PARAMETERS).unwrap()
}

#[test]
fn test_key_shape() {
    let mut rng = thread_rng();

    for (n, q) in [(1, 5), (8, 17), (N, Q), (100, 4093)] {
        let engine = Engine::from_values(n, q, 1.0).unwrap();
        let (pk, sk) = engine.generate_keypair(&mut rng);

        assert_eq!(pk.a().shape(), (n, n));
        assert_eq!(pk.b().len(), n);
        assert_eq!(sk.s().len(), n);
        assert!(pk.a().as_slice().iter().all(|&x| x < q));
        assert!(pk.b().iter().all(|&x| x < q));
        assert!(sk.s().iter().all(|&x| x < q));
    }
}

#[test]
fn test_public_key_consistency() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let modulus = engine.params().modulus();
    let (pk, sk) = engine.generate_keypair(&mut rng);

    // b - A·s is the gaussian error, cut at 6σ.
    let a_s = pk.a().mul_vector_reduce(sk.s(), modulus);
    for (&b, a_s) in pk.b().iter().zip(a_s) {
        let e = modulus.reduce_sub(b, a_s);
        let magnitude = e.min(Q - e);
        assert!(magnitude <= 20, "error {magnitude} too large");
    }
}

#[test]
fn test_secret_key_types() {
    let mut rng = thread_rng();

    let engine = toy_engine();
    let (_, sk) = engine.generate_keypair(&mut rng);
    assert!(sk.s().iter().all(|&x| x == 0 || x == 1 || x == Q - 1));

    let engine =
        Engine::new(TOY_PARAMETERS.with_secret_key_type(LweSecretKeyType::Binary)).unwrap();
    assert_eq!(engine.params().secret_key_type(), LweSecretKeyType::Binary);
    let (pk, sk) = engine.generate_keypair(&mut rng);
    assert!(sk.s().iter().all(|&x| x <= 1));

    for bit in [0, 1] {
        let c = engine.encrypt(bit, &pk, &mut rng).unwrap();
        assert_eq!(engine.decrypt(&c, &sk).unwrap(), bit);
    }
}

#[test]
fn test_statistical_correctness() {
    let mut rng = ChaCha12Rng::seed_from_u64(0x5eed);
    let engine = toy_engine();

    const TRIALS: usize = 1000;
    let mut failures = 0;
    for _ in 0..TRIALS {
        let (pk, sk) = engine.generate_keypair(&mut rng);
        let bit: u8 = rng.gen_range(0..=1);
        let c = engine.encrypt(bit, &pk, &mut rng).unwrap();
        if engine.decrypt(&c, &sk).unwrap() != bit {
            failures += 1;
        }
    }
    assert!(failures * 100 < TRIALS, "{failures} failures in {TRIALS} trials");
}

#[test]
fn test_noise_budget() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let (pk, sk) = engine.generate_keypair(&mut rng);
    let bound = engine.params().noise_bound();

    for _ in 0..200 {
        let bit: u8 = rng.gen_range(0..=1);
        let c = engine.encrypt(bit, &pk, &mut rng).unwrap();
        let (m, noise) = engine.decrypt_with_noise(&c, &sk).unwrap();
        assert_eq!(m, bit);
        assert!(noise < bound, "noise {noise} exceeds {bound}");
    }
}

#[test]
fn test_default_parameters() {
    let mut rng = thread_rng();
    let engine = Engine::new(DEFAULT_PARAMETERS).unwrap();
    assert_eq!(engine.params().dimension(), 256);
    assert_eq!(engine.params().modulus_value(), 4093);

    let (pk, sk) = engine.generate_keypair(&mut rng);
    let data = b"lattice";
    let ciphertexts = engine.encrypt_bytes(data, &pk, &mut rng).unwrap();
    assert_eq!(engine.decrypt_bytes(&ciphertexts, &sk).unwrap(), data);
}

#[test]
fn test_bytes_round_trip() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let (pk, sk) = engine.generate_keypair(&mut rng);

    for len in [0, 1, 2, 17, 64, 256] {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);

        let ciphertexts = engine.encrypt_bytes(&data, &pk, &mut rng).unwrap();
        assert_eq!(ciphertexts.len(), 8 * len);
        assert_eq!(engine.decrypt_bytes(&ciphertexts, &sk).unwrap(), data);
    }
}

#[test]
fn test_hi_scenario() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let message: [u8; 3] = [0x48, 0x69, 0x21];

    let successes = (0..50)
        .filter(|_| {
            let (pk, sk) = engine.generate_keypair(&mut rng);
            let ciphertexts = engine.encrypt_bytes(&message, &pk, &mut rng).unwrap();
            engine.decrypt_bytes(&ciphertexts, &sk).unwrap() == message
        })
        .count();
    assert!(successes >= 49, "only {successes} of 50 trials succeeded");
}

#[test]
fn test_non_determinism() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let (pk, _) = engine.generate_keypair(&mut rng);

    for bit in [0, 1] {
        let c0 = engine.encrypt(bit, &pk, &mut rng).unwrap();
        let c1 = engine.encrypt(bit, &pk, &mut rng).unwrap();
        assert_ne!(c0, c1);
    }
}

#[test]
fn test_seeded_determinism() {
    let engine = toy_engine();
    let mut rng0 = ChaCha12Rng::seed_from_u64(42);
    let mut rng1 = ChaCha12Rng::seed_from_u64(42);

    let (pk0, sk0) = engine.generate_keypair(&mut rng0);
    let (pk1, sk1) = engine.generate_keypair(&mut rng1);
    assert_eq!(pk0, pk1);
    assert_eq!(sk0, sk1);

    let c0 = engine.encrypt_bytes(b"seed", &pk0, &mut rng0).unwrap();
    let c1 = engine.encrypt_bytes(b"seed", &pk1, &mut rng1).unwrap();
    assert_eq!(c0, c1);
}

#[test]
fn test_decode_boundary() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let (_, sk) = engine.generate_keypair(&mut rng);

    // With u = 0 the phase is exactly v.
    let decrypt = |v: u64| engine.decrypt(&Ciphertext::new(vec![0; N], v), &sk).unwrap();
    assert_eq!(decrypt(Q / 4 - 1), 0);
    assert_eq!(decrypt(Q / 4), 1);
    assert_eq!(decrypt(3 * Q / 4), 1);
    assert_eq!(decrypt(3 * Q / 4 + 1), 0);
}

#[test]
fn test_invalid_input() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let (pk, sk) = engine.generate_keypair(&mut rng);

    let err = engine.encrypt(2, &pk, &mut rng).unwrap_err();
    assert_eq!(err, PkeError::InvalidBit(2));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let ciphertexts = engine.encrypt_bytes(b"x", &pk, &mut rng).unwrap();
    let err = engine.decrypt_bytes(&ciphertexts[..7], &sk).unwrap_err();
    assert_eq!(err, PkeError::CiphertextCountUnValid(7));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let short = Ciphertext::new(vec![0; N - 1], 0);
    let err = engine.decrypt(&short, &sk).unwrap_err();
    assert_eq!(
        err,
        PkeError::DimensionMismatch {
            what: "ciphertext u",
            expected: N,
            found: N - 1
        }
    );

    let unreduced = Ciphertext::new(vec![0; N], Q);
    let err = engine.decrypt(&unreduced, &sk).unwrap_err();
    assert_eq!(
        err,
        PkeError::ValueOutOfRange {
            what: "ciphertext v",
            value: Q,
            modulus: Q
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = engine
        .decrypt(&ciphertexts[0], &PrivateKey::new(vec![0; N + 1]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_keys_from_other_engine() {
    let mut rng = thread_rng();
    let small = Engine::from_values(32, Q, 3.2).unwrap();
    let engine = toy_engine();
    let (pk, sk) = engine.generate_keypair(&mut rng);

    let err = small.encrypt(1, &pk, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    let err = small.encrypt_bytes(b"a", &pk, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let c = engine.encrypt(1, &pk, &mut rng).unwrap();
    let err = small.decrypt(&c, &sk).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_config_errors() {
    let cases = [
        (0, Q, 3.2),
        (N, 64, 3.2),
        (N, 63, 3.2),
        (N, 1000, 3.2),
        (N, Q, 0.0),
        (N, Q, -1.0),
        (N, Q, f64::INFINITY),
        (1, 2, 1.0),
        (1, 3, 0.5),
    ];
    for (n, q, sigma) in cases {
        let err = Engine::from_values(n, q, sigma).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "n={n}, q={q}, sigma={sigma}");
    }

    assert_eq!(
        Engine::from_values(N, 64, 3.2).unwrap_err(),
        PkeError::ModulusTooSmall {
            modulus: 64,
            dimension: N
        }
    );
    assert_eq!(
        Engine::from_values(1, 3, 0.5).unwrap_err(),
        PkeError::ModulusTooSmallToDecode {
            modulus: 3,
            min: MIN_MODULUS
        }
    );
}

#[test]
fn test_smallest_modulus_decodes_both_bits() {
    let mut rng = ChaCha12Rng::seed_from_u64(5);
    let engine = Engine::from_values(1, 5, 0.5).unwrap();
    let (_, sk) = engine.generate_keypair(&mut rng);

    // With u = 0 the phase is exactly v, one value of each interval.
    let decrypt = |v: u64| engine.decrypt(&Ciphertext::new(vec![0], v), &sk).unwrap();
    assert_eq!(decrypt(0), 0);
    assert_eq!(decrypt(engine.params().delta()), 1);
}

#[test]
fn test_serialization() {
    let mut rng = thread_rng();
    let engine = toy_engine();
    let (pk, sk) = engine.generate_keypair(&mut rng);
    let ciphertexts = engine.encrypt_bytes(b"serde", &pk, &mut rng).unwrap();

    let pk_bytes = bincode::serialize(&pk).unwrap();
    let sk_bytes = bincode::serialize(&sk).unwrap();
    let c_bytes = bincode::serialize(&ciphertexts).unwrap();

    let pk2: PublicKey = bincode::deserialize(&pk_bytes).unwrap();
    let sk2: PrivateKey = bincode::deserialize(&sk_bytes).unwrap();
    let c2: Vec<Ciphertext> = bincode::deserialize(&c_bytes).unwrap();
    assert_eq!(pk, pk2);
    assert_eq!(sk, sk2);
    assert_eq!(ciphertexts, c2);

    assert_eq!(engine.decrypt_bytes(&c2, &sk2).unwrap(), b"serde");
    let c = engine.encrypt(1, &pk2, &mut rng).unwrap();
    assert_eq!(engine.decrypt(&c, &sk).unwrap(), 1);
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = toy_engine();
    let (pk, sk) = engine.generate_keypair(&mut ChaCha12Rng::seed_from_u64(1));

    std::thread::scope(|scope| {
        for seed in 0..4u64 {
            let (engine, pk, sk) = (&engine, &pk, &sk);
            scope.spawn(move || {
                let mut rng = ChaCha12Rng::seed_from_u64(100 + seed);
                let mut data = vec![0u8; 32];
                rng.fill_bytes(&mut data);

                let ciphertexts = engine.encrypt_bytes(&data, pk, &mut rng).unwrap();
                assert_eq!(engine.decrypt_bytes(&ciphertexts, sk).unwrap(), data);
            });
        }
    });
}
