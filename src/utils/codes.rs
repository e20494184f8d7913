//! Generación de códigos aleatorios
//!
//! Números de orden (16 dígitos) y códigos de verificación de empresa
//! (4 caracteres alfanuméricos).

use rand::Rng;

const ORDER_NO_LEN: usize = 16;
const VERIFY_CODE_LEN: usize = 4;

// Sin 0/O ni 1/I para evitar confusiones al dictarlo
const VERIFY_CODE_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generar un número de orden de 16 dígitos
pub fn generate_order_no() -> String {
    let mut rng = rand::thread_rng();
    (0..ORDER_NO_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// Generar un código de verificación de empresa de 4 caracteres
pub fn generate_verify_code() -> String {
    let mut rng = rand::thread_rng();
    (0..VERIFY_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..VERIFY_CODE_CHARS.len());
            char::from(VERIFY_CODE_CHARS[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_no_is_sixteen_digits() {
        let order_no = generate_order_no();
        assert_eq!(order_no.len(), 16);
        assert!(order_no.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_verify_code_charset() {
        for _ in 0..100 {
            let code = generate_verify_code();
            assert_eq!(code.len(), 4);
            assert!(code.bytes().all(|b| VERIFY_CODE_CHARS.contains(&b)));
        }
    }
}
