use crate::error::{Result, StegoError};

pub fn embed(image: &[u8], bits: &[u8], header_size: usize, truncate: bool) -> Result<Vec<u8>> {
    if image.len() < header_size {
        return Err(StegoError::ImageTooSmall {
            len: image.len(),
            header_size,
        });
    }

    let available = image.len() - header_size;
    if bits.len() > available && !truncate {
        return Err(StegoError::InsufficientCapacity {
            required: bits.len(),
            available,
        });
    }

    let mut output = image.to_vec();

    output[header_size..]
        .iter_mut()
        .zip(bits)
        .for_each(|(pixel, &bit)| *pixel = (*pixel & 0xFE) | bit);

    Ok(output)
}

pub fn extract(image: &[u8], header_size: usize) -> Result<Vec<u8>> {
    if image.len() < header_size {
        return Err(StegoError::ImageTooSmall {
            len: image.len(),
            header_size,
        });
    }

    Ok(image[header_size..].iter().map(|&pixel| pixel & 1).collect())
}

pub fn capacity(image: &[u8], header_size: usize) -> usize {
    image.len().saturating_sub(header_size)
}
