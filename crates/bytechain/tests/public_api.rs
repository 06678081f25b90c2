//! End-to-end exercise of the public surface, the way a consumer would
//! drive it: build a chain from wire-sized pieces, edit it in place, and
//! read it back out.

use bytechain::{ByteChain, Chunk, Error, chunk_utils::chain_of};

#[test]
fn assemble_edit_and_extract() {
    let mut chain = ByteChain::from_chunks(["GET /index.html", " HTTP/1.0", "\r\n\r\n"]);
    assert_eq!(chain.len(), 28);

    // Upgrade the protocol version in place.
    let version = chain.index_of("HTTP/1.0").expect("version present");
    chain.set(version + 7, b'1').unwrap();
    assert_eq!(chain.index_of("HTTP/1.1"), Some(version));

    // Swap the path out wholesale.
    let path = chain.index_of("/index.html").expect("path present");
    let removed = chain.splice(
        isize::try_from(path).unwrap(),
        "/index.html".len(),
        [Chunk::from("/about")],
    );
    assert_eq!(removed.to_bytes().as_slice(), b"/index.html");
    assert_eq!(
        chain.to_text(None, None, Some(-4)).unwrap(),
        "GET /about HTTP/1.1"
    );

    // Materialize the head into a caller-owned buffer.
    let mut head = [0u8; 3];
    assert_eq!(chain.copy_into(&mut head, 0, None, Some(3)), 3);
    assert_eq!(&head, b"GET");
}

#[test]
fn errors_surface_synchronously_and_leave_state_intact() {
    let mut chain = chain_of(b"hello", &[2, 3]);

    assert_eq!(chain.get(5), Err(Error::OutOfBounds { index: 5, len: 5 }));
    assert!(matches!(
        chain.to_text(Some("ascii"), None, None),
        Err(Error::UnsupportedEncoding(_))
    ));

    let backing = [1u8, 2];
    assert!(chain.try_push([(&backing[..], 0..9)]).is_err());
    assert_eq!(chain.len(), 5);
    assert_eq!(chain.to_text(None, None, None).unwrap(), "hello");
}
