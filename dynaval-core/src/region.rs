//! 容器缓冲区的内存区域
//!
//! 两种区域都是无状态的单元类型，任意两个实例相等，容器可以在句柄之间
//! 自由移动。使用哪一种在编译期由 `psram` feature 决定，见 [`Region`]。

use allocator_api2::alloc::{AllocError, Allocator, Global};
use core::alloc::Layout;
use core::ptr::NonNull;

/// 本次构建中所有容器使用的区域
#[cfg(not(feature = "psram"))]
pub type Region = HeapRegion;

/// 本次构建中所有容器使用的区域
#[cfg(feature = "psram")]
pub type Region = PsramRegion;

/// 默认堆
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapRegion;

unsafe impl Allocator for HeapRegion {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        Global.allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        Global.deallocate(ptr, layout)
    }
}

/// ESP-IDF 目标上的外部 SPI RAM
///
/// 其他目标上转发到全局堆，主机上开启 `psram` feature 也能跑测试。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PsramRegion;

#[cfg(target_os = "espidf")]
mod esp {
    use core::ffi::c_void;

    pub const MALLOC_CAP_8BIT: u32 = 1 << 2;
    pub const MALLOC_CAP_SPIRAM: u32 = 1 << 10;
    pub const PSRAM_CAPS: u32 = MALLOC_CAP_SPIRAM | MALLOC_CAP_8BIT;

    extern "C" {
        pub fn heap_caps_aligned_alloc(alignment: usize, size: usize, caps: u32) -> *mut c_void;
        pub fn heap_caps_free(ptr: *mut c_void);
    }
}

#[cfg(target_os = "espidf")]
unsafe impl Allocator for PsramRegion {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if layout.size() == 0 {
            // align 不会为 0
            let dangling = NonNull::new(layout.align() as *mut u8).ok_or(AllocError)?;
            return Ok(NonNull::slice_from_raw_parts(dangling, 0));
        }

        let raw = unsafe { esp::heap_caps_aligned_alloc(layout.align(), layout.size(), esp::PSRAM_CAPS) };
        match NonNull::new(raw.cast::<u8>()) {
            Some(ptr) => Ok(NonNull::slice_from_raw_parts(ptr, layout.size())),
            None => {
                tracing::warn!(
                    target: "dynaval::region",
                    size = layout.size(),
                    align = layout.align(),
                    "psram allocation failed"
                );
                Err(AllocError)
            }
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            esp::heap_caps_free(ptr.as_ptr().cast());
        }
    }
}

#[cfg(not(target_os = "espidf"))]
unsafe impl Allocator for PsramRegion {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        Global.allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        Global.deallocate(ptr, layout)
    }
}
