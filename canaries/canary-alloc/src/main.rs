#![cfg(not(any(test, doctest)))]
#![no_std]
#![no_main]

extern crate base58_codec;

#[cfg(target_os = "none")] // hack to please rust-analyzer
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[cfg(target_os = "none")]
struct BadAllocator;

// SAFETY: never actually called; the canary only has to link.
#[cfg(target_os = "none")]
unsafe impl core::alloc::GlobalAlloc for BadAllocator {
    unsafe fn alloc(&self, _: core::alloc::Layout) -> *mut u8 {
        core::ptr::null_mut()
    }
    unsafe fn dealloc(&self, _: *mut u8, _: core::alloc::Layout) {}
}

#[cfg(target_os = "none")]
#[global_allocator]
static ALLOCATOR: BadAllocator = BadAllocator;

#[allow(unused)]
fn main() {}
