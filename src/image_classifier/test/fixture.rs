//! Writes tiny ONNX graphs to disk so the tract adapter runs against real
//! artifacts. The protobuf is encoded by hand: the graph is
//! `Flatten -> Slice(0..26) [-> Reshape]`, so the scores are the first 26
//! pixel values of the image.

use crate::image_intake::tensor::ImageTensor;
use std::path::{Path, PathBuf};
use tract_onnx::prelude::tract_ndarray;

pub const INPUT_SIZE: usize = 64;

const FLOAT: u64 = 1;
const INT64: u64 = 7;
const IR_VERSION: u64 = 7;
const OPSET: u64 = 13;

#[derive(Default)]
struct Message(Vec<u8>);

impl Message {
    fn varint(&mut self, mut value: u64) {
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                self.0.push(byte);
                return;
            }
            self.0.push(byte | 0x80);
        }
    }

    fn int(mut self, field: u64, value: u64) -> Self {
        self.varint(field << 3);
        self.varint(value);
        self
    }

    fn bytes(mut self, field: u64, value: &[u8]) -> Self {
        self.varint((field << 3) | 2);
        self.varint(value.len() as u64);
        self.0.extend_from_slice(value);
        self
    }

    fn text(self, field: u64, value: &str) -> Self {
        self.bytes(field, value.as_bytes())
    }

    fn message(self, field: u64, value: Message) -> Self {
        self.bytes(field, &value.0)
    }
}

fn value_info(name: &str, dims: &[usize]) -> Message {
    let shape = dims.iter().fold(Message::default(), |shape, &dim| {
        shape.message(1, Message::default().int(1, dim as u64))
    });
    let tensor_type = Message::default().int(1, FLOAT).message(2, shape);

    Message::default()
        .text(1, name)
        .message(2, Message::default().message(1, tensor_type))
}

fn int64_initializer(name: &str, values: &[i64]) -> Message {
    let raw: Vec<u8> = values.iter().flat_map(|value| value.to_le_bytes()).collect();

    Message::default()
        .int(1, values.len() as u64)
        .int(2, INT64)
        .text(8, name)
        .bytes(9, &raw)
}

fn node(op_type: &str, inputs: &[&str], output: &str) -> Message {
    inputs
        .iter()
        .fold(Message::default(), |node, input| node.text(1, input))
        .text(2, output)
        .text(3, output)
        .text(4, op_type)
}

/// Writes `<dir>/<file_name>`, a model taking `[1, 64, 64, 3]` and producing
/// a tensor of `output_shape`, whose element count must be 26.
pub fn write_score_model(dir: &Path, file_name: &str, output_shape: &[usize]) -> PathBuf {
    assert_eq!(output_shape.iter().product::<usize>(), 26);
    let reshape = output_shape != [1, 26];
    let sliced = if reshape { "sliced" } else { "scores" };

    let mut graph = Message::default()
        .message(1, node("Flatten", &["image"], "flat"))
        .message(1, node("Slice", &["flat", "starts", "ends", "axes"], sliced));
    if reshape {
        graph = graph.message(1, node("Reshape", &["sliced", "shape"], "scores"));
    }

    graph = graph
        .text(2, "scores")
        .message(5, int64_initializer("starts", &[0]))
        .message(5, int64_initializer("ends", &[26]))
        .message(5, int64_initializer("axes", &[1]));
    if reshape {
        let dims: Vec<i64> = output_shape.iter().map(|&dim| dim as i64).collect();
        graph = graph.message(5, int64_initializer("shape", &dims));
    }

    let graph = graph
        .message(11, value_info("image", &[1, INPUT_SIZE, INPUT_SIZE, 3]))
        .message(12, value_info("scores", output_shape));

    let model = Message::default()
        .int(1, IR_VERSION)
        .message(7, graph)
        .message(8, Message::default().text(1, "").int(2, OPSET));

    let path = dir.join(file_name);
    std::fs::write(&path, model.0).unwrap();
    path
}

/// A 64x64 image that is black except for one channel value, placed so it
/// lands at `class_index` among the model's 26 scores.
pub fn image_scoring(class_index: usize, value: f32) -> ImageTensor {
    ImageTensor::from_array(tract_ndarray::Array4::from_shape_fn(
        (1, INPUT_SIZE, INPUT_SIZE, 3),
        |(_, row, col, channel)| {
            if (row * INPUT_SIZE + col) * 3 + channel == class_index {
                value
            } else {
                0.0
            }
        },
    ))
}
