use wgpu;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

/// Per-object data for an instanced unit cube.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Instance {
    pub fn new(model: glam::Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const VEC4: wgpu::BufferAddress = std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress;
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute { offset: 0, shader_location: 2, format: wgpu::VertexFormat::Float32x4 },
            wgpu::VertexAttribute { offset: VEC4, shader_location: 3, format: wgpu::VertexFormat::Float32x4 },
            wgpu::VertexAttribute { offset: VEC4 * 2, shader_location: 4, format: wgpu::VertexFormat::Float32x4 },
            wgpu::VertexAttribute { offset: VEC4 * 3, shader_location: 5, format: wgpu::VertexFormat::Float32x4 },
            wgpu::VertexAttribute { offset: VEC4 * 4, shader_location: 6, format: wgpu::VertexFormat::Float32x4 },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

// Unit cube centred at the origin, one quad per face so normals stay flat.
pub const CUBE_VERTICES: &[Vertex] = &[
    // Front face
    Vertex { position: [-0.5, -0.5,  0.5], normal: [0.0, 0.0, 1.0] },
    Vertex { position: [ 0.5, -0.5,  0.5], normal: [0.0, 0.0, 1.0] },
    Vertex { position: [ 0.5,  0.5,  0.5], normal: [0.0, 0.0, 1.0] },
    Vertex { position: [-0.5,  0.5,  0.5], normal: [0.0, 0.0, 1.0] },

    // Back face
    Vertex { position: [ 0.5, -0.5, -0.5], normal: [0.0, 0.0, -1.0] },
    Vertex { position: [-0.5, -0.5, -0.5], normal: [0.0, 0.0, -1.0] },
    Vertex { position: [-0.5,  0.5, -0.5], normal: [0.0, 0.0, -1.0] },
    Vertex { position: [ 0.5,  0.5, -0.5], normal: [0.0, 0.0, -1.0] },

    // Left face
    Vertex { position: [-0.5, -0.5, -0.5], normal: [-1.0, 0.0, 0.0] },
    Vertex { position: [-0.5, -0.5,  0.5], normal: [-1.0, 0.0, 0.0] },
    Vertex { position: [-0.5,  0.5,  0.5], normal: [-1.0, 0.0, 0.0] },
    Vertex { position: [-0.5,  0.5, -0.5], normal: [-1.0, 0.0, 0.0] },

    // Right face
    Vertex { position: [ 0.5, -0.5,  0.5], normal: [1.0, 0.0, 0.0] },
    Vertex { position: [ 0.5, -0.5, -0.5], normal: [1.0, 0.0, 0.0] },
    Vertex { position: [ 0.5,  0.5, -0.5], normal: [1.0, 0.0, 0.0] },
    Vertex { position: [ 0.5,  0.5,  0.5], normal: [1.0, 0.0, 0.0] },

    // Top face
    Vertex { position: [-0.5,  0.5,  0.5], normal: [0.0, 1.0, 0.0] },
    Vertex { position: [ 0.5,  0.5,  0.5], normal: [0.0, 1.0, 0.0] },
    Vertex { position: [ 0.5,  0.5, -0.5], normal: [0.0, 1.0, 0.0] },
    Vertex { position: [-0.5,  0.5, -0.5], normal: [0.0, 1.0, 0.0] },

    // Bottom face
    Vertex { position: [-0.5, -0.5, -0.5], normal: [0.0, -1.0, 0.0] },
    Vertex { position: [ 0.5, -0.5, -0.5], normal: [0.0, -1.0, 0.0] },
    Vertex { position: [ 0.5, -0.5,  0.5], normal: [0.0, -1.0, 0.0] },
    Vertex { position: [-0.5, -0.5,  0.5], normal: [0.0, -1.0, 0.0] },
];

pub const CUBE_INDICES: &[u16] = &[
    // Front face
    0, 1, 2,  2, 3, 0,
    // Back face
    4, 5, 6,  6, 7, 4,
    // Left face
    8, 9, 10, 10, 11, 8,
    // Right face
    12, 13, 14, 14, 15, 12,
    // Top face
    16, 17, 18, 18, 19, 16,
    // Bottom face
    20, 21, 22, 22, 23, 20,
];
