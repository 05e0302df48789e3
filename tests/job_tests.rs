// tests/job_tests.rs
use aes_pad_cryptor::{decrypt_to_vec, random_iv, CryptorJob, CryptorRequest};

#[test]
fn test_job_runs_to_a_result() {
    let key = vec![7u8; 32];
    let iv = random_iv();
    let job = CryptorJob::new(
        CryptorRequest::to_encrypt(b"payload".to_vec(), key.clone()).with_iv(iv.to_vec()),
    );

    let ciphertext = job.run().expect("not cancelled").unwrap();
    let decrypted = decrypt_to_vec(&ciphertext, &key, Some(&iv)).unwrap();
    assert_eq!(decrypted, b"payload");
}

#[test]
fn test_cancel_before_start_skips_execution() {
    let job = CryptorJob::new(CryptorRequest::to_encrypt(b"payload".to_vec(), vec![7u8; 32]));
    let handle = job.cancel_handle();
    handle.cancel();
    assert!(job.run().is_none());
}

#[test]
fn test_cancelled_job_skips_even_invalid_requests() {
    // Validation belongs to execution; a cancelled job reports nothing.
    let job = CryptorJob::new(CryptorRequest::to_encrypt(b"payload".to_vec(), vec![0u8; 5]));
    job.cancel_handle().cancel();
    assert!(job.run().is_none());
}

#[test]
fn test_parallel_jobs_are_independent() {
    let iv = random_iv();
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let key = vec![i; 16];
            let request =
                CryptorRequest::to_encrypt(vec![i; 100], key).with_iv(iv.to_vec());
            (i, CryptorJob::new(request).spawn())
        })
        .collect();

    for (i, handle) in handles {
        let ciphertext = handle.join().unwrap().expect("not cancelled").unwrap();
        let decrypted = decrypt_to_vec(&ciphertext, &[i; 16], Some(&iv)).unwrap();
        assert_eq!(decrypted, vec![i; 100]);
    }
}

#[test]
fn test_spawned_job_reports_failure_variant() {
    use aes_pad_cryptor::CryptorError;

    let job = CryptorJob::new(CryptorRequest::to_decrypt(vec![0u8; 15], vec![0u8; 16]));
    let result = job.spawn().join().unwrap().expect("not cancelled");
    assert!(matches!(result, Err(CryptorError::Parameter)));
}
