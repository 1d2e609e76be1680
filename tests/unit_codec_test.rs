use beryl::core::BerylError;
use beryl::core::protocol::{CommandFrame, RespFrame, RespFrameCodec};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

#[tokio::test]
async fn test_encode_command_as_array_of_bulk_strings() {
    let frame = CommandFrame {
        name: "LLEN",
        args: vec![Bytes::from_static(b"mylist")],
    };
    let mut buf = BytesMut::new();
    RespFrameCodec.encode(frame, &mut buf).unwrap();
    assert_eq!(&buf[..], b"*2\r\n$4\r\nLLEN\r\n$6\r\nmylist\r\n");
}

#[tokio::test]
async fn test_encode_command_with_empty_value() {
    let frame = CommandFrame {
        name: "LPUSHX",
        args: vec![Bytes::from_static(b"k"), Bytes::from_static(b"")],
    };
    assert_eq!(
        frame.encode_to_vec().unwrap(),
        b"*3\r\n$6\r\nLPUSHX\r\n$1\r\nk\r\n$0\r\n\r\n"
    );
}

#[tokio::test]
async fn test_decode_simple_string() {
    let mut buf = BytesMut::from(&b"+OK\r\n"[..]);
    let frame = RespFrameCodec.decode(&mut buf).unwrap().unwrap();
    assert_eq!(frame, RespFrame::SimpleString("OK".to_string()));
    assert!(buf.is_empty());
}

#[tokio::test]
async fn test_decode_integer_and_error() {
    let mut buf = BytesMut::from(&b":42\r\n"[..]);
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::Integer(42)
    );

    let mut buf = BytesMut::from(&b"-ERR boom\r\n"[..]);
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::Error("ERR boom".to_string())
    );
}

#[tokio::test]
async fn test_decode_null_sentinels() {
    let mut buf = BytesMut::from(&b"$-1\r\n"[..]);
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::Null
    );

    let mut buf = BytesMut::from(&b"*-1\r\n"[..]);
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::NullArray
    );
}

#[tokio::test]
async fn test_decode_array_of_bulk_strings() {
    let mut buf = BytesMut::from(&b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n"[..]);
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::Array(vec![
            RespFrame::BulkString(Bytes::from_static(b"foo")),
            RespFrame::BulkString(Bytes::from_static(b"bar")),
        ])
    );
}

#[tokio::test]
async fn test_decode_partial_frame_waits_for_more_data() {
    let mut buf = BytesMut::from(&b"$5\r\nhel"[..]);
    assert_eq!(RespFrameCodec.decode(&mut buf).unwrap(), None);
    // Nothing consumed while the frame is incomplete.
    assert_eq!(&buf[..], b"$5\r\nhel");

    buf.extend_from_slice(b"lo\r\n");
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::BulkString(Bytes::from_static(b"hello"))
    );
}

#[tokio::test]
async fn test_decode_consumes_one_frame_at_a_time() {
    let mut buf = BytesMut::from(&b"+OK\r\n:7\r\n"[..]);
    assert_eq!(
        RespFrameCodec.decode(&mut buf).unwrap().unwrap(),
        RespFrame::SimpleString("OK".to_string())
    );
    assert_eq!(&buf[..], b":7\r\n");
}

#[tokio::test]
async fn test_decode_unknown_prefix_is_a_syntax_error() {
    let mut buf = BytesMut::from(&b"!bogus\r\n"[..]);
    let err = RespFrameCodec.decode(&mut buf).unwrap_err();
    assert_eq!(err, BerylError::SyntaxError);
}
